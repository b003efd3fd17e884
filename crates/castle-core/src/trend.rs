/// Direction of elevation change between two distinct adjacent samples.
///
/// `Undefined` is the state before any direction has been established;
/// `between` never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trend {
    #[default]
    Undefined,
    Rising,
    Falling,
}

impl Trend {
    /// Direction from `from` to `to`. `None` when the samples are equal.
    #[inline]
    pub fn between(from: i32, to: i32) -> Option<Trend> {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Some(Trend::Rising),
            std::cmp::Ordering::Less => Some(Trend::Falling),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[inline]
    pub fn is_established(self) -> bool {
        self != Trend::Undefined
    }

    /// True if moving to `next` switches an established direction.
    #[inline]
    pub fn reverses(self, next: Trend) -> bool {
        self.is_established() && self != next
    }
}
