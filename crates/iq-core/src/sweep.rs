//! Linear sweeps
//!
//! A [`Linspace`] is a description, not a buffer: iterating it twice yields
//! the same samples, and it never touches the single-point evaluators.

use serde::Serialize;

/// `count` evenly spaced samples over the closed range `[start, stop]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Linspace {
    pub start: f64,
    pub stop: f64,
    pub count: usize,
}

impl Linspace {
    pub const fn new(start: f64, stop: f64, count: usize) -> Self {
        Self { start, stop, count }
    }

    /// Distance between neighbouring samples; zero for fewer than two.
    pub fn step(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            (self.stop - self.start) / (self.count - 1) as f64
        }
    }

    /// Sample `index`, with the last sample pinned to `stop`.
    pub fn value(&self, index: usize) -> f64 {
        if self.count > 1 && index == self.count - 1 {
            self.stop
        } else {
            self.start + self.step() * index as f64
        }
    }

    pub fn iter(&self) -> LinspaceIter {
        LinspaceIter {
            space: *self,
            front: 0,
            back: self.count,
        }
    }

    /// Evaluate `f` at every sample, stopping at the first error.
    pub fn try_sample<F, E>(&self, mut f: F) -> Result<Vec<(f64, f64)>, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        self.iter().map(|x| f(x).map(|y| (x, y))).collect()
    }
}

impl IntoIterator for Linspace {
    type Item = f64;
    type IntoIter = LinspaceIter;

    fn into_iter(self) -> LinspaceIter {
        self.iter()
    }
}

impl IntoIterator for &Linspace {
    type Item = f64;
    type IntoIter = LinspaceIter;

    fn into_iter(self) -> LinspaceIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct LinspaceIter {
    space: Linspace,
    front: usize,
    back: usize,
}

impl Iterator for LinspaceIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        let value = self.space.value(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for LinspaceIter {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.space.value(self.back))
    }
}

impl ExactSizeIterator for LinspaceIter {}
