use crate::models::Draw;

/// Nombre de tirages contenant chaque numéro, indexé par `numéro - 1`.
pub fn count_frequencies(draws: &[Draw], pool_size: u8) -> Vec<u32> {
    let mut counts = vec![0u32; pool_size as usize];

    for draw in draws {
        for &n in &draw.numbers {
            let idx = (n as usize).wrapping_sub(1);
            if idx < counts.len() {
                counts[idx] += 1;
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_test_draws;

    #[test]
    fn test_frequency_sum_matches_slots() {
        let draws = make_test_draws(23);
        let counts = count_frequencies(&draws, 37);
        let total: u32 = counts.iter().sum();
        assert_eq!(total as usize, 7 * draws.len());
    }

    #[test]
    fn test_frequency_unseen_is_zero() {
        let draws = make_test_draws(10);
        let counts = count_frequencies(&draws, 37);
        // make_test_draws ne couvre que 1..=35
        assert_eq!(counts[35], 0);
        assert_eq!(counts[36], 0);
        assert_eq!(counts[0], 2);
    }

    #[test]
    fn test_frequency_number_in_every_draw() {
        let draws: Vec<Draw> = (0..100)
            .map(|i| {
                let others = (0..6).map(|k| 6 + ((i + k * 5) % 30) as u8);
                Draw::new(std::iter::once(5).chain(others).collect())
            })
            .collect();
        let counts = count_frequencies(&draws, 37);
        assert_eq!(counts[4], 100);
    }

    #[test]
    fn test_frequency_empty_history() {
        let counts = count_frequencies(&[], 37);
        assert_eq!(counts, vec![0; 37]);
    }
}
