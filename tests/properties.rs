//! Property tests over randomly seeded boards.

use elevens::{BOARD_SIZE, Board, BoardOptions, Elevens, Group, Rank, Rules};
use proptest::prelude::*;

fn board(seed: u64) -> Board<Elevens> {
    Board::new(BoardOptions::default().quiet(), seed)
}

fn pair_sums_to_11(board: &Board<Elevens>, i: usize, j: usize) -> bool {
    match (board.card_at(i), board.card_at(j)) {
        (Some(a), Some(b)) => a.point_value + b.point_value == 11,
        _ => false,
    }
}

fn is_jqk(board: &Board<Elevens>, i: usize, j: usize, k: usize) -> bool {
    let mut ranks: Vec<Rank> = [i, j, k]
        .iter()
        .filter_map(|&index| board.card_at(index).map(|c| c.rank))
        .collect();
    ranks.sort();
    ranks == [Rank::Jack, Rank::Queen, Rank::King]
}

proptest! {
    #[test]
    fn pair_legality_matches_point_sum(seed in any::<u64>()) {
        let board = board(seed);
        let occupied = board.card_indexes();
        for (n, &i) in occupied.iter().enumerate() {
            for &j in &occupied[n + 1..] {
                prop_assert_eq!(board.is_legal(&[i, j]), pair_sums_to_11(&board, i, j));
            }
        }
    }

    #[test]
    fn triplet_legality_matches_jqk(seed in any::<u64>()) {
        let board = board(seed);
        let occupied = board.card_indexes();
        for (a, &i) in occupied.iter().enumerate() {
            for (b, &j) in occupied.iter().enumerate().skip(a + 1) {
                for &k in &occupied[b + 1..] {
                    prop_assert_eq!(board.is_legal(&[i, j, k]), is_jqk(&board, i, j, k));
                }
            }
        }
    }

    #[test]
    fn other_selection_sizes_are_never_legal(seed in any::<u64>(), len in 4usize..=BOARD_SIZE) {
        let board = board(seed);
        let selection: Vec<usize> = (0..len).collect();
        prop_assert!(!board.is_legal(&selection));
        prop_assert!(!board.is_legal(&selection[..1]));
    }

    #[test]
    fn another_play_matches_exhaustive_search(seed in any::<u64>()) {
        let mut board = board(seed);
        loop {
            let occupied = board.card_indexes();
            let mut expected = false;
            for (a, &i) in occupied.iter().enumerate() {
                for (b, &j) in occupied.iter().enumerate().skip(a + 1) {
                    expected |= pair_sums_to_11(&board, i, j);
                    for &k in &occupied[b + 1..] {
                        expected |= is_jqk(&board, i, j, k);
                    }
                }
            }
            prop_assert_eq!(board.another_play_is_possible(), expected);
            if !board.play_if_possible() {
                break;
            }
        }
    }

    #[test]
    fn auto_play_touches_only_matched_slots_and_terminates(seed in any::<u64>()) {
        let mut board = board(seed);
        let mut plays = 0;

        loop {
            let before = board.slots().to_vec();
            let group = board.rules().find_group(board.slots(), &board.card_indexes());
            let played = board.play_if_possible();
            prop_assert_eq!(played, group.is_some());

            let Some(group) = group else {
                prop_assert_eq!(board.slots(), before.as_slice());
                break;
            };
            for index in 0..BOARD_SIZE {
                if !group.indices().contains(&index) {
                    prop_assert_eq!(board.slots()[index], before[index]);
                }
            }
            prop_assert!(board.card_indexes().len() <= BOARD_SIZE);

            plays += 1;
            prop_assert!(plays <= 26);
        }

        prop_assert!(!board.another_play_is_possible());
    }
}
