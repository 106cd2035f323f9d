/// How many tabs the bar renders. Only two- and four-item layouts leave
/// enough room for the central action button.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ItemCount {
    Two,
    Four,
}

impl ItemCount {
    /// Number of tab slots actually rendered.
    pub fn get(&self) -> usize {
        match self {
            ItemCount::Two => 2,
            ItemCount::Four => 4,
        }
    }

    /// Horizontal inset of the bar, in CSS pixels. The two-item layout
    /// narrows the bar so the icons stay close to the cutout.
    pub fn padding(&self) -> f64 {
        match self {
            ItemCount::Two => 60.0,
            ItemCount::Four => 20.0,
        }
    }

    /// Index before which the extra gap for the action button is inserted.
    pub fn gap_index(&self) -> usize {
        self.get() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get() {
        assert_eq!(ItemCount::Two.get(), 2);
        assert_eq!(ItemCount::Four.get(), 4);
    }

    #[test]
    fn test_padding() {
        assert_eq!(ItemCount::Two.padding(), 60.0);
        assert_eq!(ItemCount::Four.padding(), 20.0);
    }

    #[test]
    fn test_gap_index() {
        assert_eq!(ItemCount::Two.gap_index(), 1);
        assert_eq!(ItemCount::Four.gap_index(), 2);
    }
}
