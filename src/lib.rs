//! 区間クエリのためのデータ構造
//!
//! - [`FenwickTree`]: 一点更新・区間取得 (演算はアーベル群)
//! - [`SegmentTree`]: 一点更新・区間取得 (演算はモノイド)
//! - [`LazySegmentTree`]: 区間更新・区間取得 (作用素付きモノイド)
//! - [`SparseTable`]: 構築後は変更不可・区間取得が *O*(1) (演算は冪等)
//!
//! 演算は値を持たない構造体にトレイトを実装して渡す. よく使うものは[`ops`]にある.
//! 添字はすべて0始まりで, 区間は`l..r`や`l..=r`などの[`RangeBounds`](std::ops::RangeBounds)で指定する.
//! 範囲外の添字や区間は[`Error`]として返され, データ構造の状態は変わらない.

pub mod error;
pub mod fenwicktree;
pub mod lazysegtree;
pub mod ops;
pub mod segmenttree;
pub mod sparsetable;
pub mod util;

pub use error::{Error, Result};
pub use fenwicktree::FenwickTree;
pub use lazysegtree::{LazyMonoid, LazySegmentTree};
pub use segmenttree::SegmentTree;
pub use sparsetable::SparseTable;
