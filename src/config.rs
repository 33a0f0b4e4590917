pub const APP_NAME: &str = "PyChess";
pub const APP_SCRIPT: &str = "PyChess.py";
pub const ICON_FILE: &str = "chessIcon.ico";

pub const CHESS_PACKAGE: &str = "chess";

/// Direct link to a zip with the engine binary at its root; its contents are
/// unpacked verbatim into the stockfish directory.
/// TODO: swap in the real hosting URL before shipping.
pub const STOCKFISH_URL: &str = "https://example.com/stockfish.zip";
