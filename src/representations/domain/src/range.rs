/// An inclusive integer range `start..step..end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RangeValue {
    pub start: i64,
    pub step: i64,
    pub end: i64,
}

impl RangeValue {
    pub fn new(start: i64, step: i64, end: i64) -> Self {
        Self { start, step, end }
    }

    pub fn with_unit_step(start: i64, end: i64) -> Self {
        Self::new(start, 1, end)
    }

    pub fn iter(&self) -> RangeIter {
        RangeIter {
            next: Some(self.start),
            step: self.step,
            end: self.end,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl IntoIterator for RangeValue {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct RangeIter {
    next: Option<i64>,
    step: i64,
    end: i64,
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        let in_bounds = match self.step {
            0 => false,
            step if step > 0 => current <= self.end,
            _ => current >= self.end,
        };

        if !in_bounds {
            self.next = None;
            return None;
        }

        // Stepping past i64::MAX/MIN ends the range rather than wrapping
        self.next = current.checked_add(self.step);
        Some(current)
    }
}
