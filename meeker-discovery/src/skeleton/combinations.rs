//! Lexicographic k-subset enumeration over a sorted candidate slice.

/// Iterator over all size-`k` subsets of `items`, in lexicographic order
/// of positions. With `items` sorted ascending this is ascending-by-id
/// order, which is what makes the conditioning-set search reproducible.
pub struct Combinations<'a> {
    items: &'a [usize],
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Combinations<'a> {
    pub fn new(items: &'a [usize], k: usize) -> Self {
        Self {
            items,
            indices: (0..k).collect(),
            done: k > items.len(),
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let subset: Vec<usize> = self.indices.iter().map(|&i| self.items[i]).collect();

        // Advance to the next index vector, rightmost position first.
        let k = self.indices.len();
        let n = self.items.len();
        let mut pos = k;
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            if self.indices[pos] < n - (k - pos) {
                self.indices[pos] += 1;
                for later in (pos + 1)..k {
                    self.indices[later] = self.indices[later - 1] + 1;
                }
                break;
            }
        }

        Some(subset)
    }
}
