/// How desirable a display string is; smaller ranks are preferred.
///
/// Fields compare in declaration order: subtracted parenthesized groups,
/// `× 1` anywhere but the very end, `÷ 1` occurrences, then length in
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayRank {
    pub subtracted_groups: usize,
    pub inner_times_one: usize,
    pub divisions_by_one: usize,
    pub length: usize,
}

impl DisplayRank {
    pub fn of(display: &str) -> Self {
        let chars: Vec<char> = display.chars().collect();
        let mut rank = DisplayRank {
            subtracted_groups: 0,
            inner_times_one: 0,
            divisions_by_one: 0,
            length: chars.len(),
        };

        let mut prev_symbol: Option<char> = None;
        let mut i = 0;
        while let Some(&c) = chars.get(i) {
            if c.is_whitespace() {
                i += 1;
                continue;
            }
            if c.is_ascii_digit() {
                let start = i;
                while chars.get(i).is_some_and(|d| d.is_ascii_digit()) {
                    i += 1;
                }
                let is_one = i - start == 1 && c == '1';
                if is_one {
                    match prev_symbol {
                        Some('×' | '*') => {
                            let at_end = chars[i..].iter().all(|d| d.is_whitespace());
                            if !at_end {
                                rank.inner_times_one += 1;
                            }
                        }
                        Some('÷' | '/') => rank.divisions_by_one += 1,
                        _ => {}
                    }
                }
                prev_symbol = Some('1');
                continue;
            }
            if c == '(' && matches!(prev_symbol, Some('−' | '-')) {
                rank.subtracted_groups += 1;
            }
            prev_symbol = Some(c);
            i += 1;
        }

        rank
    }
}

/// Whether `candidate` should replace `existing` as the display of a class.
///
/// Only a strictly better rank replaces, so the first-discovered display
/// wins ties.
pub fn prefer_display(candidate: &str, existing: &str) -> bool {
    DisplayRank::of(candidate) < DisplayRank::of(existing)
}
