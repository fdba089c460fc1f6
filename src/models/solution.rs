//! Solution encoding and the group codec.
//!
//! An assignment is a flat sequence of center indices interleaved with the
//! [`SENTINEL`]. Each maximal run of indices between sentinels is a group
//! whose first index is the group's transfer hub:
//!
//! ```text
//! [3, 0, 1, -1, 2, 4, -1]   →   hub 3 ← {0, 1},  hub 2 ← {4}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{HlaError, HlaResult};

/// One entry of an assignment: a center index or the [`SENTINEL`].
pub type Slot = i64;

/// Group terminator in an assignment.
pub const SENTINEL: Slot = -1;

/// A transfer hub together with the centers assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Transfer hub (first index of the run).
    pub hub: usize,
    /// Remaining centers of the run, in order.
    pub members: Vec<usize>,
}

impl Group {
    /// Creates a group with the given hub and members.
    pub fn new(hub: usize, members: Vec<usize>) -> Self {
        Self { hub, members }
    }

    /// Hub followed by members.
    pub fn centers(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(self.hub).chain(self.members.iter().copied())
    }

    /// Number of centers in the group, hub included.
    pub fn len(&self) -> usize {
        self.members.len() + 1
    }

    /// Always `false`: a group holds at least its hub.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Splits an assignment into groups.
///
/// Empty runs (adjacent sentinels, leading or trailing sentinels) produce no
/// group. A trailing run without a terminating sentinel still forms a group.
///
/// # Examples
///
/// ```
/// use u_hubloc::models::{decode_groups, Group};
///
/// let groups = decode_groups(&[3, 0, 1, -1, -1, 2, 4, -1]);
/// assert_eq!(groups, vec![Group::new(3, vec![0, 1]), Group::new(2, vec![4])]);
/// ```
pub fn decode_groups(assignment: &[Slot]) -> Vec<Group> {
    assignment
        .split(|&slot| slot == SENTINEL)
        .filter(|run| !run.is_empty())
        .map(|run| Group {
            hub: run[0] as usize,
            members: run[1..].iter().map(|&c| c as usize).collect(),
        })
        .collect()
}

/// Concatenates groups back into an assignment, one sentinel per group.
///
/// # Examples
///
/// ```
/// use u_hubloc::models::{encode_groups, Group};
///
/// let assignment = encode_groups(&[Group::new(3, vec![0, 1]), Group::new(2, vec![])]);
/// assert_eq!(assignment, vec![3, 0, 1, -1, 2, -1]);
/// ```
pub fn encode_groups(groups: &[Group]) -> Vec<Slot> {
    let mut assignment = Vec::with_capacity(groups.iter().map(|g| g.len() + 1).sum());
    for group in groups {
        assignment.extend(group.centers().map(|c| c as Slot));
        assignment.push(SENTINEL);
    }
    assignment
}

/// A candidate solution: an optional treatment hub and an assignment.
///
/// Solutions are plain values. Operators and algorithms always work on
/// copies, so a solution held as "current" or "best" is never changed
/// behind its holder's back.
///
/// # Examples
///
/// ```
/// use u_hubloc::models::Solution;
///
/// let sol = Solution::new(vec![0, 1, -1, 2, -1]).with_treatment_hub(2);
/// assert_eq!(sol.transfer_hubs(), vec![0, 2]);
/// assert_eq!(sol.treatment_hub(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solution {
    treatment_hubs: Vec<usize>,
    assignment: Vec<Slot>,
}

impl Solution {
    /// Creates a solution without a treatment hub.
    pub fn new(assignment: Vec<Slot>) -> Self {
        Self {
            treatment_hubs: Vec::new(),
            assignment,
        }
    }

    /// Creates a solution from explicit parts.
    pub fn from_parts(treatment_hubs: Vec<usize>, assignment: Vec<Slot>) -> Self {
        Self {
            treatment_hubs,
            assignment,
        }
    }

    /// Creates a solution from groups.
    pub fn from_groups(groups: &[Group]) -> Self {
        Self::new(encode_groups(groups))
    }

    /// A new solution with the same treatment hubs and the given assignment.
    pub fn with_assignment(&self, assignment: Vec<Slot>) -> Self {
        Self {
            treatment_hubs: self.treatment_hubs.clone(),
            assignment,
        }
    }

    /// Returns a copy designating `hub` as the treatment facility.
    pub fn with_treatment_hub(mut self, hub: usize) -> Self {
        self.treatment_hubs = vec![hub];
        self
    }

    /// Returns a copy with no treatment facility.
    pub fn without_treatment_hub(mut self) -> Self {
        self.treatment_hubs.clear();
        self
    }

    /// Designated treatment hubs (zero or one).
    pub fn treatment_hubs(&self) -> &[usize] {
        &self.treatment_hubs
    }

    /// The treatment hub, if designated.
    pub fn treatment_hub(&self) -> Option<usize> {
        self.treatment_hubs.first().copied()
    }

    /// The flat assignment sequence.
    pub fn assignment(&self) -> &[Slot] {
        &self.assignment
    }

    /// Decoded groups of the assignment.
    pub fn groups(&self) -> Vec<Group> {
        decode_groups(&self.assignment)
    }

    /// Transfer hubs in group order.
    pub fn transfer_hubs(&self) -> Vec<usize> {
        self.groups().into_iter().map(|g| g.hub).collect()
    }

    /// Checks the partition invariant against `n_centers`.
    ///
    /// Every center `0..n_centers` must appear exactly once, only the
    /// sentinel may be negative, and the treatment hub must be a valid
    /// center.
    pub fn validate(&self, n_centers: usize) -> HlaResult<()> {
        if self.treatment_hubs.len() > 1 {
            return Err(HlaError::MalformedSolution(format!(
                "{} treatment hubs designated, at most one allowed",
                self.treatment_hubs.len()
            )));
        }
        if let Some(&hub) = self.treatment_hubs.first() {
            if hub >= n_centers {
                return Err(HlaError::MalformedSolution(format!(
                    "treatment hub {hub} out of range 0..{n_centers}"
                )));
            }
        }

        let mut seen = vec![false; n_centers];
        for &slot in &self.assignment {
            if slot == SENTINEL {
                continue;
            }
            if slot < 0 || slot as usize >= n_centers {
                return Err(HlaError::MalformedSolution(format!(
                    "entry {slot} out of range 0..{n_centers}"
                )));
            }
            let center = slot as usize;
            if seen[center] {
                return Err(HlaError::MalformedSolution(format!(
                    "center {center} assigned twice"
                )));
            }
            seen[center] = true;
        }

        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(HlaError::MalformedSolution(format!(
                "center {missing} not assigned"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_basic() {
        let groups = decode_groups(&[3, 0, 1, -1, 2, 4, -1]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], Group::new(3, vec![0, 1]));
        assert_eq!(groups[1], Group::new(2, vec![4]));
    }

    #[test]
    fn test_decode_skips_empty_runs() {
        let groups = decode_groups(&[-1, -1, 5, -1, -1]);
        assert_eq!(groups, vec![Group::new(5, vec![])]);
    }

    #[test]
    fn test_decode_unterminated_tail() {
        let groups = decode_groups(&[1, -1, 0, 2]);
        assert_eq!(groups, vec![Group::new(1, vec![]), Group::new(0, vec![2])]);
    }

    #[test]
    fn test_decode_only_sentinels() {
        assert!(decode_groups(&[-1, -1]).is_empty());
        assert!(decode_groups(&[]).is_empty());
    }

    #[test]
    fn test_encode_preserves_member_order() {
        let a = encode_groups(&[Group::new(4, vec![2, 0, 1])]);
        assert_eq!(a, vec![4, 2, 0, 1, -1]);
    }

    #[test]
    fn test_validate_ok() {
        let sol = Solution::new(vec![2, 0, -1, -1, 1, 3, -1]).with_treatment_hub(0);
        assert!(sol.validate(4).is_ok());
    }

    #[test]
    fn test_validate_duplicate() {
        let sol = Solution::new(vec![0, 1, -1, 1, -1]);
        assert!(matches!(
            sol.validate(2),
            Err(HlaError::MalformedSolution(_))
        ));
    }

    #[test]
    fn test_validate_missing() {
        let sol = Solution::new(vec![0, -1, 2, -1]);
        assert!(sol.validate(3).is_err());
    }

    #[test]
    fn test_validate_out_of_range() {
        assert!(Solution::new(vec![0, 7, -1]).validate(2).is_err());
        assert!(Solution::new(vec![0, -3, 1]).validate(2).is_err());
        assert!(Solution::new(vec![0, 1, -1])
            .with_treatment_hub(5)
            .validate(2)
            .is_err());
    }

    #[test]
    fn test_treatment_hub_toggle() {
        let sol = Solution::new(vec![0, -1]).with_treatment_hub(0);
        assert_eq!(sol.treatment_hubs(), &[0]);
        let cleared = sol.clone().without_treatment_hub();
        assert!(cleared.treatment_hub().is_none());
        assert_eq!(sol.treatment_hub(), Some(0));
    }

    fn arb_assignment() -> impl Strategy<Value = Vec<Slot>> {
        (1usize..9, 0usize..5).prop_flat_map(|(n, extra)| {
            let mut slots: Vec<Slot> = (0..n as Slot).collect();
            slots.extend(std::iter::repeat_n(SENTINEL, extra + 1));
            Just(slots).prop_shuffle()
        })
    }

    proptest! {
        #[test]
        fn prop_round_trip(assignment in arb_assignment()) {
            let groups = decode_groups(&assignment);
            let reencoded = encode_groups(&groups);
            prop_assert_eq!(decode_groups(&reencoded), groups);
        }

        #[test]
        fn prop_groups_partition(assignment in arb_assignment()) {
            let n = assignment.iter().filter(|&&s| s != SENTINEL).count();
            let mut centers: Vec<usize> = decode_groups(&assignment)
                .iter()
                .flat_map(|g| g.centers().collect::<Vec<_>>())
                .collect();
            centers.sort_unstable();
            prop_assert_eq!(centers, (0..n).collect::<Vec<_>>());
        }
    }
}
