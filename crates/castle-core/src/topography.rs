use serde::{Deserialize, Serialize};

use crate::castles::{castle_sites, count_castles, CastleSite};

/// An ordered sequence of integer elevation samples.
/// No ordering or uniqueness constraint; may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topography {
    pub data: Vec<i32>,
}

/// A maximal run of equal adjacent samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plateau {
    pub start: usize,
    pub len: usize,
    pub elevation: i32,
}

impl Topography {
    pub fn new(data: Vec<i32>) -> Self {
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn min_elevation(&self) -> Option<i32> {
        self.data.iter().copied().min()
    }

    pub fn max_elevation(&self) -> Option<i32> {
        self.data.iter().copied().max()
    }

    /// Split into maximal runs of equal samples, left to right.
    pub fn plateaus(&self) -> Vec<Plateau> {
        let mut out: Vec<Plateau> = Vec::new();
        for (i, &v) in self.data.iter().enumerate() {
            match out.last_mut() {
                Some(p) if p.elevation == v => p.len += 1,
                _ => out.push(Plateau { start: i, len: 1, elevation: v }),
            }
        }
        out
    }

    /// Copy with every plateau reduced to a single sample.
    pub fn collapsed(&self) -> Topography {
        let mut data = self.data.clone();
        data.dedup();
        Topography { data }
    }

    pub fn castle_count(&self) -> usize {
        count_castles(&self.data)
    }

    pub fn castle_sites(&self) -> Vec<CastleSite> {
        castle_sites(&self.data)
    }
}

impl From<Vec<i32>> for Topography {
    fn from(data: Vec<i32>) -> Self {
        Self::new(data)
    }
}

impl From<&[i32]> for Topography {
    fn from(data: &[i32]) -> Self {
        Self::new(data.to_vec())
    }
}

impl AsRef<[i32]> for Topography {
    fn as_ref(&self) -> &[i32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plateaus_cover_every_sample_once() {
        let t = Topography::from(vec![4, 4, 5, 5, 6, 7, -2, -2]);
        let p = t.plateaus();
        assert_eq!(
            p,
            vec![
                Plateau { start: 0, len: 2, elevation: 4 },
                Plateau { start: 2, len: 2, elevation: 5 },
                Plateau { start: 4, len: 1, elevation: 6 },
                Plateau { start: 5, len: 1, elevation: 7 },
                Plateau { start: 6, len: 2, elevation: -2 },
            ]
        );
        assert_eq!(p.iter().map(|p| p.len).sum::<usize>(), t.len());
    }

    #[test]
    fn empty_topography_has_no_plateaus_or_extremes() {
        let t = Topography::default();
        assert!(t.is_empty());
        assert!(t.plateaus().is_empty());
        assert_eq!(t.min_elevation(), None);
        assert_eq!(t.max_elevation(), None);
        assert_eq!(t.castle_count(), 0);
    }

    #[test]
    fn collapsed_keeps_one_sample_per_plateau() {
        let t = Topography::from(&[9, 9, 9, 9, 4, 4, 4, -8, -5, 5, 5, 5][..]);
        assert_eq!(t.collapsed().as_slice(), &[9, 4, -8, -5, 5]);
        assert_eq!(t.collapsed().len(), t.plateaus().len());
    }

    #[test]
    fn extremes() {
        let t = Topography::from(vec![9, -4, 5, 6, -7, 3]);
        assert_eq!(t.min_elevation(), Some(-7));
        assert_eq!(t.max_elevation(), Some(9));
    }

    #[test]
    fn castle_accessors_delegate() {
        let t = Topography::from(vec![1, -3, -1]);
        assert_eq!(t.castle_count(), 2);
        assert_eq!(t.castle_sites().len(), 2);
    }

    #[test]
    fn serde_shape_is_a_data_array() {
        let t = Topography::from(vec![-1, 0, 2]);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"data":[-1,0,2]}"#);
        let back: Topography = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
