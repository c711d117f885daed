use crate::error::Result;
use crate::util::{check_index, resolve_range, AbelianGroup};

/// FenwickTree. BinaryIndexedTreeとも
///
/// 演算がアーベル群のときに限定して, 一点への作用と区間の総積を計算する.
/// `self.0[i]`は区間`(i & (i + 1))..=i`の要素の総積を持つ.
#[derive(Clone)]
pub struct FenwickTree<G: AbelianGroup>(Box<[G::T]>, G);

impl<G: AbelianGroup> FenwickTree<G> {
    /// 全ての要素が`group.e()`で初期化された長さ`n`のFenwickTreeを構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(group: G, n: usize) -> Self {
        log::trace!("built fenwick tree: len = {n}");
        Self((0..n).map(|_| group.e()).collect(), group)
    }

    /// 配列`vec`からFenwickTreeを構築する.
    ///
    /// 累積積を先に求めて, 各頂点を2つの累積積の差として計算する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn from_vec(group: G, vec: Vec<G::T>) -> Self {
        let n = vec.len();
        let mut prefix = Vec::with_capacity(n + 1);
        let mut acc = group.e();
        prefix.push(acc.clone());
        for item in &vec {
            acc = group.op(&acc, item);
            prefix.push(acc.clone());
        }
        let tree = (0..n)
            .map(|i| group.opinv(&prefix[i + 1], &prefix[i & (i + 1)]))
            .collect();
        log::trace!("built fenwick tree: len = {n}");
        Self(tree, group)
    }

    /// FenwickTreeの長さを返す
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// FenwickTreeが空か判定する
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `index`番目の要素に`delta`を掛ける
    ///
    /// # Errors
    ///
    /// `index >= self.len()`のとき[`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange)を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn add(&mut self, index: usize, delta: &G::T) -> Result<()> {
        check_index(index, self.len())?;
        let mut i = index;
        while i < self.len() {
            self.0[i] = self.1.op(&self.0[i], delta);
            i |= i + 1;
        }
        Ok(())
    }

    /// `index`番目の要素を`value`に置き換える
    ///
    /// # Errors
    ///
    /// `index >= self.len()`のとき[`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange)を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn set(&mut self, index: usize, value: &G::T) -> Result<()> {
        let current = self.get(index)?;
        self.add(index, &self.1.opinv(value, &current))
    }

    /// `0..end`の範囲の要素の総積を計算する
    ///
    /// `end == 0`のときは`group.e()`を返す.
    ///
    /// # Errors
    ///
    /// `end > self.len()`のとき[`Error::RangeOutOfBounds`](crate::Error::RangeOutOfBounds)を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn prefix(&self, end: usize) -> Result<G::T> {
        let (_, end) = resolve_range(..end, self.len())?;
        Ok(self.prefix_unchecked(end))
    }

    fn prefix_unchecked(&self, mut end: usize) -> G::T {
        let mut s = self.1.e();
        while end > 0 {
            s = self.1.op(&s, &self.0[end - 1]);
            end &= end - 1;
        }
        s
    }

    /// `range`の範囲の要素の総積を計算する
    ///
    /// 空の区間に対しては`group.e()`を返す.
    ///
    /// # Errors
    ///
    /// `range`が`0..self.len()`に含まれない区間のとき[`Error::RangeOutOfBounds`](crate::Error::RangeOutOfBounds)を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn range_query(&self, range: impl std::ops::RangeBounds<usize>) -> Result<G::T> {
        let (left, right) = resolve_range(range, self.len())?;
        Ok(self
            .1
            .opinv(&self.prefix_unchecked(right), &self.prefix_unchecked(left)))
    }

    /// `index`番目の要素を取得する
    ///
    /// # Errors
    ///
    /// `index >= self.len()`のとき[`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange)を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn get(&self, index: usize) -> Result<G::T> {
        check_index(index, self.len())?;
        self.range_query(index..=index)
    }
}

impl<G: AbelianGroup + Default> From<Vec<G::T>> for FenwickTree<G> {
    fn from(value: Vec<G::T>) -> Self {
        Self::from_vec(G::default(), value)
    }
}
