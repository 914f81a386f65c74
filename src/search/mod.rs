//! Brute-force crib search.
//!
//! A crib is a fragment of plaintext believed to appear in a message. The
//! search decodes the ciphertext once per candidate settings, each time on a
//! freshly built machine, and keeps the candidates whose output contains the
//! crib. Candidate generators enumerate the usual unknowns: starting
//! positions, rotor orders, ring settings, the reflector, missing plugboard
//! leads and swapped reflector pairs.

pub mod error;

pub use error::SearchError;

use crate::builder::{BuildError, ReflectorName, RotorName};
use crate::core::Symbol;
use crate::settings::MachineSettings;
use tracing::{debug, info};

/// Known plaintext fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crib(String);

impl Crib {
    /// Accept a non-empty run of uppercase letters.
    pub fn new(text: &str) -> Result<Self, SearchError> {
        if text.is_empty() {
            return Err(SearchError::EmptyCrib);
        }
        Symbol::parse_text(text).map_err(SearchError::Text)?;
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, plaintext: &str) -> bool {
        plaintext.contains(&self.0)
    }
}

/// A candidate whose decode contained the crib.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub settings: MachineSettings,
    pub plaintext: String,
}

/// Decode `ciphertext` under every candidate and keep the ones matching `crib`.
///
/// Candidates that do not describe a buildable machine, or whose machine
/// fails part way through the message, are skipped.
///
/// # Example
///
/// ```rust
/// use enigma_rotor::search::{reflector_candidates, search, Crib};
/// use enigma_rotor::settings::MachineSettings;
///
/// let base = MachineSettings::new("Beta Gamma V", "A", "04 02 14", "M J M")
///     .with_plugboard(["KI", "XN", "FL"]);
/// let crib = Crib::new("SECRETS").unwrap();
///
/// let hits = search(
///     reflector_candidates(&base),
///     "DMEXBMKYCVPNQBEDHXVPZGKMTFFBJRPJTLHLCHOTKOYXGGHZ",
///     &crib,
/// )
/// .unwrap();
///
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].settings.reflector, "C");
/// ```
pub fn search<I>(
    candidates: I,
    ciphertext: &str,
    crib: &Crib,
) -> Result<Vec<SearchHit>, SearchError>
where
    I: IntoIterator<Item = MachineSettings>,
{
    Symbol::parse_text(ciphertext).map_err(SearchError::Text)?;

    let mut tried = 0usize;
    let mut skipped = 0usize;
    let mut hits = Vec::new();
    for settings in candidates {
        tried += 1;
        let mut machine = match settings.build() {
            Ok(machine) => machine,
            Err(error) => {
                skipped += 1;
                debug!(%error, rotors = %settings.rotors, "skipping unbuildable candidate");
                continue;
            }
        };
        let plaintext = match machine.encode(ciphertext) {
            Ok(plaintext) => plaintext,
            Err(error) => {
                skipped += 1;
                debug!(%error, ?settings, "skipping candidate that failed to decode");
                continue;
            }
        };
        if crib.matches(&plaintext) {
            debug!(?settings, %plaintext, "crib matched");
            hits.push(SearchHit {
                settings,
                plaintext,
            });
        }
    }

    info!(tried, skipped, hits = hits.len(), crib = crib.as_str(), "crib search finished");
    Ok(hits)
}

/// `base` with each catalogued reflector in turn.
pub fn reflector_candidates(base: &MachineSettings) -> impl Iterator<Item = MachineSettings> + '_ {
    ReflectorName::ALL
        .into_iter()
        .map(move |name| base.clone().with_reflector(name.as_str()))
}

/// `base` with every combination of starting positions.
pub fn position_candidates(base: &MachineSettings) -> impl Iterator<Item = MachineSettings> + '_ {
    let count = base.rotors.split_whitespace().count();
    all_positions(count).map(move |positions| base.clone().with_positions(positions))
}

/// Every starting-position string for `rotor_count` rotors, `"A A A"` to `"Z Z Z"`.
///
/// # Example
///
/// ```rust
/// use enigma_rotor::search::all_positions;
///
/// let mut positions = all_positions(2);
/// assert_eq!(positions.next().as_deref(), Some("A A"));
/// assert_eq!(positions.next().as_deref(), Some("A B"));
/// assert_eq!(all_positions(2).count(), 676);
/// ```
pub fn all_positions(rotor_count: usize) -> impl Iterator<Item = String> {
    let total = 26u64.pow(rotor_count as u32);
    (0..total).map(move |mut n| {
        let mut letters = vec![Symbol::A; rotor_count];
        for slot in letters.iter_mut().rev() {
            *slot = Symbol::from_index((n % 26) as i32);
            n /= 26;
        }
        join_symbols(&letters)
    })
}

/// Every ordered choice of `count` distinct rotors from `names`.
pub fn rotor_orders(names: &[RotorName], count: usize) -> Vec<String> {
    ordered_selections(names, count)
        .into_iter()
        .map(|order| {
            order
                .iter()
                .map(|n| n.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Every ring-setting string for `count` rotors drawn from `values`, with repeats.
pub fn ring_combinations(values: &[u8], count: usize) -> Vec<String> {
    (0..count).fold(vec![Vec::new()], |combos: Vec<Vec<u8>>, _| {
        combos
            .iter()
            .flat_map(|prefix| {
                values.iter().map(move |&v| {
                    let mut next = prefix.clone();
                    next.push(v);
                    next
                })
            })
            .collect()
    })
    .into_iter()
    .map(|rings| {
        rings
            .iter()
            .map(|r| format!("{r:02}"))
            .collect::<Vec<_>>()
            .join(" ")
    })
    .collect()
}

/// `base` with one extra lead per `fixed` letter, partnered with distinct
/// letters from `pool`.
///
/// Use this when some leads are known to exist but their partners were lost.
/// The pool should hold only letters not already plugged in `base`.
///
/// # Example
///
/// ```rust
/// use enigma_rotor::core::Symbol;
/// use enigma_rotor::search::plug_candidates;
/// use enigma_rotor::settings::MachineSettings;
///
/// let letters = |s: &str| Symbol::parse_text(s).unwrap();
/// let base = MachineSettings::new("I II III", "B", "01 01 01", "A A A");
///
/// let candidates: Vec<_> = plug_candidates(&base, &letters("AI"), &letters("DEK")).collect();
/// assert_eq!(candidates.len(), 6);
/// assert_eq!(candidates[0].plugboard, ["AD", "IE"]);
/// ```
pub fn plug_candidates<'a>(
    base: &'a MachineSettings,
    fixed: &'a [Symbol],
    pool: &[Symbol],
) -> impl Iterator<Item = MachineSettings> + 'a {
    ordered_selections(pool, fixed.len())
        .into_iter()
        .map(move |partners| {
            let mut plugboard = base.plugboard.clone();
            plugboard.extend(
                fixed
                    .iter()
                    .zip(&partners)
                    .map(|(left, right)| format!("{left}{right}")),
            );
            base.clone().with_plugboard(plugboard)
        })
}

/// `base` with every swap of partners among any four of its reflector's pairs.
///
/// Four pairs `ab cd ef gh` can be regrouped three ways, and each grouping
/// swaps partners inside both halves: `(ab, cd)` becomes `ad cb`. That is
/// 715 choices of four pairs times three groupings.
pub fn rewiring_candidates(base: &MachineSettings) -> Result<Vec<MachineSettings>, BuildError> {
    let reflector = base.reflector.parse::<ReflectorName>()?.build()?;
    let pairs: Vec<(Symbol, Symbol)> = reflector
        .wiring()
        .pairs()
        .iter()
        .copied()
        .filter(|(a, b)| a < b)
        .collect();

    const GROUPINGS: [[usize; 4]; 3] = [[0, 1, 2, 3], [0, 3, 1, 2], [0, 2, 1, 3]];
    let swap = |(a, b): (Symbol, Symbol), (c, d): (Symbol, Symbol)| {
        [format!("{a}{d}"), format!("{c}{b}")]
    };

    let mut candidates = Vec::new();
    for four in combinations(&pairs, 4) {
        for [w, x, y, z] in GROUPINGS {
            let rewiring: Vec<String> = swap(four[w], four[x])
                .into_iter()
                .chain(swap(four[y], four[z]))
                .collect();
            candidates.push(base.clone().with_rewiring(rewiring));
        }
    }
    Ok(candidates)
}

/// Ordered selections of `count` items without repetition.
fn ordered_selections<T: Copy + PartialEq>(items: &[T], count: usize) -> Vec<Vec<T>> {
    fn extend<T: Copy + PartialEq>(
        items: &[T],
        count: usize,
        chosen: &mut Vec<T>,
        out: &mut Vec<Vec<T>>,
    ) {
        if chosen.len() == count {
            out.push(chosen.clone());
            return;
        }
        for &item in items {
            if !chosen.contains(&item) {
                chosen.push(item);
                extend(items, count, chosen, out);
                chosen.pop();
            }
        }
    }

    let mut out = Vec::new();
    extend(items, count, &mut Vec::with_capacity(count), &mut out);
    out
}

/// Unordered selections of `count` items, in input order.
fn combinations<T: Copy>(items: &[T], count: usize) -> Vec<Vec<T>> {
    if count == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for (i, &first) in items.iter().enumerate() {
        for mut rest in combinations(&items[i + 1..], count - 1) {
            rest.insert(0, first);
            out.push(rest);
        }
    }
    out
}

fn join_symbols(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CoreError;

    #[test]
    fn crib_rejects_lowercase_and_empty() {
        assert!(Crib::new("SECRETS").is_ok());
        assert!(matches!(Crib::new("secrets"), Err(SearchError::Text(_))));
        assert_eq!(Crib::new(""), Err(SearchError::EmptyCrib));
    }

    #[test]
    fn crib_matches_substrings() {
        let crib = Crib::new("SECRET").unwrap();
        assert!(crib.matches("THESECRETSTRING"));
        assert!(!crib.matches("SECRXT"));
    }

    #[test]
    fn all_positions_covers_the_alphabet() {
        let positions: Vec<String> = all_positions(1).collect();
        assert_eq!(positions.len(), 26);
        assert_eq!(positions[0], "A");
        assert_eq!(positions[25], "Z");

        let last = all_positions(3).last().unwrap();
        assert_eq!(last, "Z Z Z");
        assert_eq!(all_positions(3).nth(27).unwrap(), "A B B");
    }

    #[test]
    fn zero_rotors_yield_one_empty_position() {
        assert_eq!(all_positions(0).collect::<Vec<_>>(), vec![String::new()]);
    }

    #[test]
    fn rotor_orders_never_repeat_a_rotor() {
        let orders = rotor_orders(&[RotorName::I, RotorName::II, RotorName::III], 2);
        assert_eq!(orders, ["I II", "I III", "II I", "II III", "III I", "III II"]);

        let five = rotor_orders(&RotorName::ALL[..5], 3);
        assert_eq!(five.len(), 60);
    }

    #[test]
    fn plug_candidates_extend_the_base_plugboard() {
        let base = MachineSettings::new("I II III", "B", "01 01 01", "A A A")
            .with_plugboard(["WP"]);
        let fixed = Symbol::parse_text("AI").unwrap();
        let pool = Symbol::parse_text("DEKL").unwrap();

        let candidates: Vec<_> = plug_candidates(&base, &fixed, &pool).collect();
        assert_eq!(candidates.len(), 12);
        assert_eq!(candidates[0].plugboard, ["WP", "AD", "IE"]);
        assert!(candidates.iter().all(|c| c.plugboard[1][1..] != c.plugboard[2][1..]));
        assert_eq!(base.plugboard, ["WP"]);
    }

    #[test]
    fn rewiring_candidates_swap_within_four_pairs() {
        let base = MachineSettings::new("I II III", "B", "01 01 01", "A A A");
        let candidates = rewiring_candidates(&base).unwrap();
        assert_eq!(candidates.len(), 715 * 3);

        // Reflector B's first pairs are AY BR CU DH.
        let first: Vec<_> = candidates[..3]
            .iter()
            .map(|c| c.reflector_rewiring.join(" "))
            .collect();
        assert_eq!(first, ["AR BY CH DU", "AH DY BU CR", "AU CY BH DR"]);

        for candidate in candidates.iter().step_by(97) {
            let machine = candidate.build().unwrap();
            assert!(machine.reflector().wiring().check_involution().is_ok());
        }
    }

    #[test]
    fn rewiring_candidates_need_a_known_reflector() {
        let base = MachineSettings::new("I II III", "Q", "01 01 01", "A A A");
        assert!(matches!(
            rewiring_candidates(&base),
            Err(BuildError::UnknownComponent { kind: "reflector", .. })
        ));
    }

    #[test]
    fn combinations_keep_input_order() {
        assert_eq!(
            combinations(&[1, 2, 3, 4], 3),
            vec![vec![1, 2, 3], vec![1, 2, 4], vec![1, 3, 4], vec![2, 3, 4]]
        );
        assert_eq!(combinations(&[1, 2], 3), Vec::<Vec<i32>>::new());
    }

    #[test]
    fn ring_combinations_are_zero_padded() {
        let rings = ring_combinations(&[2, 14], 2);
        assert_eq!(rings, ["02 02", "02 14", "14 02", "14 14"]);
    }

    #[test]
    fn search_finds_the_matching_reflector() {
        let base = MachineSettings::new("Beta Gamma V", "A", "04 02 14", "M J M")
            .with_plugboard(["KI", "XN", "FL"]);
        let crib = Crib::new("SECRETS").unwrap();

        let hits = search(
            reflector_candidates(&base),
            "DMEXBMKYCVPNQBEDHXVPZGKMTFFBJRPJTLHLCHOTKOYXGGHZ",
            &crib,
        )
        .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].settings.reflector, "C");
        assert_eq!(
            hits[0].plaintext,
            "NICEWORKYOUVEMANAGEDTODECODETHEFIRSTSECRETSTRING"
        );
    }

    #[test]
    fn search_skips_unbuildable_candidates() {
        let good = MachineSettings::new("I II III", "B", "01 01 01", "A A A");
        let bad = good.clone().with_rotors("I II IX");
        let crib = Crib::new("AAAAA").unwrap();

        let hits = search([bad, good.clone()], "BDZGO", &crib).unwrap();
        assert_eq!(hits, vec![SearchHit {
            settings: good,
            plaintext: "AAAAA".to_string(),
        }]);
    }

    #[test]
    fn search_skips_candidates_that_fail_to_decode() {
        let good = MachineSettings::new("I II III", "B", "01 01 01", "A A A");
        // A lone replacement pair leaves the reflector without a contact for Y.
        let broken = good.clone().with_rewiring(["AB"]);
        assert!(broken.build().is_ok());

        let ciphertext = "A".repeat(300);
        assert_eq!(
            broken.build().unwrap().encode(&ciphertext),
            Err(CoreError::RotorWiring('Y'))
        );
        let expected = good.build().unwrap().encode(&ciphertext).unwrap();
        let crib = Crib::new(&expected[..10]).unwrap();

        let hits = search([broken, good.clone()], &ciphertext, &crib).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].settings, good);
        assert_eq!(hits[0].plaintext, expected);
    }

    #[test]
    fn search_rejects_invalid_ciphertext() {
        let crib = Crib::new("A").unwrap();
        let result = search(Vec::<MachineSettings>::new(), "abc", &crib);
        assert_eq!(result, Err(SearchError::Text(CoreError::InvalidSymbol('a'))));
    }

    #[test]
    fn position_search_recovers_start() {
        let base = MachineSettings::new("I II III", "B", "01 01 01", "A A A");
        let secret = base.clone().with_positions("C D E");
        let ciphertext = secret.build().unwrap().encode("ATTACKATDAWN").unwrap();

        let crib = Crib::new("ATTACKATDAWN").unwrap();
        let hits = search(
            position_candidates(&base).filter(|s| s.initial_positions.starts_with('C')),
            &ciphertext,
            &crib,
        )
        .unwrap();

        assert!(hits.iter().any(|h| h.settings.initial_positions == "C D E"));
    }
}
