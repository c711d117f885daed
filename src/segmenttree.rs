use crate::error::Result;
use crate::util::{check_index, resolve_range, Monoid};

/// 一点更新・区間取得のセグメントツリー
///
/// 葉の数を2冪に切り上げた完全二分木で, 頂点`i`の子は`2i`と`2i+1`になる.
/// 余った葉は単位元で埋める.
#[derive(Clone)]
pub struct SegmentTree<M: Monoid>(Box<[M::T]>, usize, M);

impl<M: Monoid> SegmentTree<M> {
    /// 全ての要素が`monoid.e()`で初期化された長さ`n`のSegmentTreeを構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(monoid: M, n: usize) -> Self {
        let size = n.next_power_of_two();
        log::trace!("built segment tree: len = {n}, leaves = {size}");
        Self((0..2 * size).map(|_| monoid.e()).collect(), n, monoid)
    }

    /// 配列`vec`からSegmentTreeを構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn from_vec(monoid: M, vec: Vec<M::T>) -> Self {
        let n = vec.len();
        let size = n.next_power_of_two();
        let mut tree = Vec::with_capacity(2 * size);
        tree.extend((0..size).map(|_| monoid.e()));
        tree.extend(vec);
        tree.extend((n..size).map(|_| monoid.e()));
        for i in (1..size).rev() {
            tree[i] = monoid.op(&tree[2 * i], &tree[2 * i + 1]);
        }
        log::trace!("built segment tree: len = {n}, leaves = {size}");
        Self(tree.into_boxed_slice(), n, monoid)
    }

    /// SegmentTreeの長さを返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.1
    }

    /// SegmentTreeが空かどうか調べる
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.1 == 0
    }

    fn size(&self) -> usize {
        self.0.len() / 2
    }

    /// SegmentTreeの`index`番目の値を`value`に設定する.
    ///
    /// 祖先の値は全て子から計算し直すので, 演算が加法でなくても正しく動く.
    ///
    /// # Errors
    ///
    /// `index >= self.len()`のとき[`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange)を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn set(&mut self, index: usize, value: M::T) -> Result<()> {
        check_index(index, self.len())?;
        let mut i = index + self.size();
        self.0[i] = value;
        while i > 1 {
            i >>= 1;
            self.0[i] = self.2.op(&self.0[2 * i], &self.0[2 * i + 1]);
        }
        Ok(())
    }

    /// SegmentTreeの`index`番目の値を取得する.
    ///
    /// # Errors
    ///
    /// `index >= self.len()`のとき[`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange)を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    pub fn get(&self, index: usize) -> Result<&M::T> {
        check_index(index, self.len())?;
        Ok(&self.0[index + self.size()])
    }

    /// SegmentTreeの`range`の範囲の要素の総積を計算する.
    ///
    /// 空の区間に対しては`monoid.e()`を返す. 左右の順序は保たれるので, 演算が可換でなくてもよい.
    ///
    /// # Errors
    ///
    /// `range`が`0..self.len()`に含まれない区間のとき[`Error::RangeOutOfBounds`](crate::Error::RangeOutOfBounds)を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn range_query(&self, range: impl std::ops::RangeBounds<usize>) -> Result<M::T> {
        let (left, right) = resolve_range(range, self.len())?;
        let mut left = left + self.size();
        let mut right = right + self.size();
        let mut left_val = self.2.e();
        let mut right_val = self.2.e();
        while left < right {
            if left & 1 == 1 {
                left_val = self.2.op(&left_val, &self.0[left]);
                left += 1;
            }
            if right & 1 == 1 {
                right -= 1;
                right_val = self.2.op(&self.0[right], &right_val);
            }
            left >>= 1;
            right >>= 1;
        }
        Ok(self.2.op(&left_val, &right_val))
    }

    /// 全体の総積を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn all_prod(&self) -> M::T {
        self.0[1].clone()
    }

    /// `f(self.range_query(index..x))`だが`!f(self.range_query(index..=x))`な最小の`x`を見つけるような二分探索を行う.
    ///
    /// 見つからなかった場合は`self.len()`を返す.
    ///
    /// # Constraints
    ///
    /// - `f(monoid.e())`は`true`である.
    /// - `f`は単調である.
    ///
    /// # Errors
    ///
    /// `index > self.len()`のとき[`Error::RangeOutOfBounds`](crate::Error::RangeOutOfBounds)を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn binary_search(&self, index: usize, f: impl Fn(&M::T) -> bool) -> Result<usize> {
        let (index, _) = resolve_range(index.., self.len())?;
        debug_assert!(f(&self.2.e()));
        if index == self.len() {
            return Ok(index);
        }
        let size = self.size();
        let mut i = index + size;
        let mut acc = self.2.e();
        loop {
            while i & 1 == 0 {
                i >>= 1;
            }
            let next = self.2.op(&acc, &self.0[i]);
            if !f(&next) {
                while i < size {
                    i *= 2;
                    let next = self.2.op(&acc, &self.0[i]);
                    if f(&next) {
                        acc = next;
                        i += 1;
                    }
                }
                return Ok(i - size);
            }
            acc = next;
            i += 1;
            if i.is_power_of_two() {
                return Ok(self.len());
            }
        }
    }
}

impl<M: Monoid + Default> From<Vec<M::T>> for SegmentTree<M> {
    fn from(value: Vec<M::T>) -> Self {
        Self::from_vec(M::default(), value)
    }
}

impl<M: Monoid> AsRef<[M::T]> for SegmentTree<M> {
    fn as_ref(&self) -> &[M::T] {
        let size = self.size();
        &self.0[size..size + self.len()]
    }
}
