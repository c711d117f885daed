use thiserror::Error;

/// 区間クエリ系のデータ構造が返すエラー
///
/// どれも呼び出し側の引数の誤りを表す. エラーを返した操作はデータ構造の状態を変更しない.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Error)]
pub enum Error {
    /// 添字が`0..len`に含まれない
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
    },

    /// 区間`start..end`が`0..len`に含まれない, または`start > end`である
    #[error("range {start}..{end} out of range for length {len}")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    /// 単位元を持たない演算に対して空区間が与えられた
    #[error("empty range starting at {start}")]
    EmptyRange { start: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
