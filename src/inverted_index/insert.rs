use std::cmp::Ordering;

use super::occurrence::{Occurrence, TF};

/// Where an occurrence belongs in a frequency-descending list, along with
/// every midpoint the binary search looked at to get there.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct InsertionPoint {
    pub index: usize,
    pub probes: Vec<usize>,
}

/// Binary searches `sorted` (descending by frequency) for the slot of a new
/// occurrence with `frequency`.
///
/// The search stops at the first midpoint with an equal frequency. The new
/// occurrence is then placed after the whole run of equal frequencies so
/// ties keep their insertion order. If the window empties instead, `low`
/// is the first entry with a lower frequency.
pub fn insertion_point(sorted: &[Occurrence], frequency: TF) -> InsertionPoint {
    let mut probes = Vec::new();
    let mut low = 0;
    let mut high = sorted.len();

    while low < high {
        let mid = (low + high - 1) / 2;
        probes.push(mid);

        match frequency.cmp(&sorted[mid].frequency) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => {
                let equal_run = sorted[mid..]
                    .iter()
                    .take_while(|occurrence| occurrence.frequency == frequency)
                    .count();

                return InsertionPoint {
                    index: mid + equal_run,
                    probes,
                };
            }
        }
    }

    InsertionPoint { index: low, probes }
}

/// Moves the last occurrence of `occurrences` into place, assuming all the
/// others are already in descending frequency order.
///
/// Returns the midpoints probed by the search, empty for lists of one or
/// zero entries.
pub fn insert_last_occurrence(occurrences: &mut [Occurrence]) -> Vec<usize> {
    let Some((last, sorted)) = occurrences.split_last() else {
        return Vec::new();
    };

    let InsertionPoint { index, probes } = insertion_point(sorted, last.frequency);
    occurrences[index..].rotate_right(1);

    probes
}
