//! Philosopher name assignment.

use rand::seq::SliceRandom;
use rand::Rng;

/// One-word names of classical philosophers
pub const PHILOSOPHER_NAMES: &[&str] = &[
    "Thales", "Anaximander", "Anaximenes", "Pythagoras",
    "Heraclitus", "Parmenides", "Empedocles", "Anaxagoras",
    "Democritus", "Protagoras", "Gorgias", "Antisthenes",
    "Diogenes", "Plato", "Aristotle", "Speusippus",
    "Xenocrates", "Arcesilaus", "Carneades", "Epicurus",
    "Zeno", "Cleanthes", "Chrysippus", "Crates",
    "Pyrrho", "Timon", "Sextus", "Eudoxus",
    "Stilpo", "Cicero", "Plotinus", "Porphyry",
    "Iamblichus", "Proclus", "Simplicius", "Philoponus",
    "Damascius", "Socrates", "Hippasus", "Philolaus",
    "Archytas", "Alcmaeon", "Hippocrates", "Antiphon",
    "Metrodorus", "Leucippus", "Melissus", "Xenophanes",
    "Menippus", "Apollodorus", "Dio", "Aenesidemus",
    "Agrippa", "Aristo", "Bion", "Aristippus",
    "Arete", "Hegesias",
];

/// Draw `count` distinct names at random.
///
/// Once the list is exhausted, names repeat with a numeric suffix
/// ("Plato2", "Plato3", ...) so every philosopher stays distinguishable.
pub fn assign_names<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
    let mut pool: Vec<&str> = PHILOSOPHER_NAMES.to_vec();
    pool.shuffle(rng);

    (0..count)
        .map(|i| {
            let name = pool[i % pool.len()];
            match i / pool.len() {
                0 => name.to_string(),
                round => format!("{}{}", name, round + 1),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let mut rng = StdRng::seed_from_u64(1);
        let names = assign_names(PHILOSOPHER_NAMES.len() * 2 + 3, &mut rng);
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_builtin_list_has_no_duplicates() {
        let unique: HashSet<_> = PHILOSOPHER_NAMES.iter().collect();
        assert_eq!(unique.len(), PHILOSOPHER_NAMES.len());
    }

    #[test]
    fn test_names_are_reproducible_with_seed() {
        let a = assign_names(5, &mut StdRng::seed_from_u64(9));
        let b = assign_names(5, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert!(a.iter().all(|name| PHILOSOPHER_NAMES.contains(&name.as_str())));
    }

    #[test]
    fn test_zero_names() {
        assert!(assign_names(0, &mut StdRng::seed_from_u64(0)).is_empty());
    }
}
