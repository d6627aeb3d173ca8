// Lexicographic k-subset enumeration over indices 0..n
//
// Subsets come out in standard lexicographic order: [0,1,2], [0,1,3], ... [n-3,n-2,n-1].
// The allocator's cross-floor tie-break ("first minimum wins") relies on this order,
// so it must not be replaced by a different generator.

#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    // Moves to the next subset and returns its indices in increasing order.
    // The returned slice is reused between calls, which keeps the hot loop allocation-free.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }

        let k = self.indices.len();

        // rightmost slot that has not reached its maximum value
        let mut slot = k;
        loop {
            if slot == 0 {
                self.done = true;
                return None;
            }
            slot -= 1;
            if self.indices[slot] < self.n - k + slot {
                break;
            }
        }

        self.indices[slot] += 1;
        for j in slot + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        Some(&self.indices)
    }
}

// C(n, k); saturates instead of overflowing
pub fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }

    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result.saturating_mul((n - i) as u128) / (i as u128 + 1);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_all(n: usize, k: usize) -> Vec<Vec<usize>> {
        let mut combos = Combinations::new(n, k);
        let mut out = vec![];
        while let Some(idx) = combos.advance() {
            out.push(idx.to_vec());
        }
        out
    }

    #[test]
    fn test_lexicographic_order() {
        let all = collect_all(4, 2);
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_counts_match_binomial() {
        for n in 0..9 {
            for k in 0..=n {
                assert_eq!(collect_all(n, k).len() as u128, binomial(n, k), "C({n}, {k})");
            }
        }
        assert_eq!(binomial(97, 5), 64_446_024);
    }

    #[test]
    fn test_edge_cases() {
        assert!(collect_all(3, 4).is_empty());
        assert_eq!(collect_all(3, 3), vec![vec![0, 1, 2]]);
        assert_eq!(collect_all(5, 0), vec![Vec::<usize>::new()]);
        assert_eq!(binomial(3, 4), 0);
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut combos = Combinations::new(2, 1);
        assert_eq!(combos.advance(), Some(&[0][..]));
        assert_eq!(combos.advance(), Some(&[1][..]));
        assert_eq!(combos.advance(), None);
        assert_eq!(combos.advance(), None);
    }
}
