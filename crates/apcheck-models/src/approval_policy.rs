use lazy_static::lazy_static;
use regex::Regex;

/// Approvals count used when the input is missing or unusable.
pub const DEFAULT_APPROVALS_COUNT: u64 = 1;

lazy_static! {
    // Unanchored: "abc12" matches, then fails to parse.
    static ref APPROVALS_COUNT_RGX: Regex = Regex::new(r"[0-9]{1,2}").unwrap();
}

/// Approval policy: how many distinct approvers are needed, and whether the
/// count must be matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalPolicy {
    approvals_count: u64,
    only_equal: bool,
}

impl Default for ApprovalPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_APPROVALS_COUNT, false)
    }
}

impl ApprovalPolicy {
    /// Creates a new policy.
    pub fn new(approvals_count: u64, only_equal: bool) -> Self {
        Self {
            approvals_count,
            only_equal,
        }
    }

    /// Build a policy from raw action inputs.
    pub fn from_inputs(approvals_count: &str, only_equal: &str) -> Self {
        Self::new(
            Self::resolve_approvals_count(approvals_count),
            Self::parse_only_equal(only_equal),
        )
    }

    /// Resolve the wanted approvals count.
    ///
    /// Never fails: anything that does not yield a strictly positive
    /// integer resolves to [`DEFAULT_APPROVALS_COUNT`].
    pub fn resolve_approvals_count(candidate: &str) -> u64 {
        if APPROVALS_COUNT_RGX.is_match(candidate) {
            if let Some(count) = parse_leading_integer(candidate) {
                if count > 0 {
                    return count;
                }
            }
        }

        DEFAULT_APPROVALS_COUNT
    }

    /// Case-insensitive comparison with `"true"`.
    pub fn parse_only_equal(value: &str) -> bool {
        value.to_lowercase() == "true"
    }

    /// Wanted approvals count.
    pub fn approvals_count(&self) -> u64 {
        self.approvals_count
    }

    /// Exact match mode.
    pub fn only_equal(&self) -> bool {
        self.only_equal
    }

    /// Decide whether `approvers_count` distinct approvers satisfy the policy.
    pub fn is_satisfied(&self, approvers_count: usize) -> bool {
        let approvers_count = approvers_count as u64;
        if self.only_equal {
            approvers_count == self.approvals_count
        } else {
            approvers_count >= self.approvals_count
        }
    }
}

/// Parse the leading base-10 integer of `input`: optional leading
/// whitespace, optional sign, then ASCII digits. Trailing garbage is ignored.
///
/// Negative values give `Some(0)`. Values which do not fit in an `u64`
/// saturate to `u64::MAX`.
fn parse_leading_integer(input: &str) -> Option<u64> {
    let input = input.trim_start();
    let (negative, rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    if negative {
        return Some(0);
    }

    // Only ASCII digits remain, so parsing can only fail on overflow
    Some(rest[..digits_len].parse::<u64>().unwrap_or(u64::MAX))
}
