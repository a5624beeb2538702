#![cfg(test)]
use combi_core::combination::Combination;
use combi_core::enumerator::{self, MAX_LENGTH, SearchRequest};
use combi_core::finder::{Finder, Strategy};
use combi_common::config::Config;
use combi_common::input::{self, Reply};

fn as_digits(found: &[Combination]) -> Vec<Vec<u8>> {
    found.iter().map(|c| c.digits().to_vec()).collect()
}

/// Kakuro reference values: how many ways each (length, total) run can be filled.
#[test]
fn known_run_counts() {
    let cases: [(usize, u64, usize); 8] = [
        (2, 3, 1),
        (2, 10, 4),
        (3, 15, 8),
        (4, 20, 12),
        (5, 25, 12),
        (8, 40, 1),
        (9, 45, 1),
        (9, 44, 0),
    ];

    for (length, total, expected) in cases {
        assert_eq!(
            enumerator::enumerate(length, total).len(),
            expected,
            "length {length}, total {total}"
        );
    }
}

#[test]
fn documented_examples() {
    assert_eq!(as_digits(&enumerator::enumerate(3, 6)), vec![vec![1, 2, 3]]);
    assert_eq!(as_digits(&enumerator::enumerate(2, 17)), vec![vec![8, 9]]);
    assert_eq!(
        as_digits(&enumerator::enumerate(9, 45)),
        vec![vec![1, 2, 3, 4, 5, 6, 7, 8, 9]]
    );
    assert!(enumerator::enumerate(1, 10).is_empty());
    assert!(enumerator::enumerate(4, 1).is_empty());
}

#[test]
fn totals_outside_reach_are_empty() {
    for length in 1..=MAX_LENGTH {
        let len: u64 = length as u64;
        let min_total: u64 = len * (len + 1) / 2;
        let max_total: u64 = len * 9 - len * (len - 1) / 2;

        assert!(enumerator::enumerate(length, min_total - 1).is_empty());
        assert_eq!(enumerator::enumerate(length, min_total).len(), 1);
        assert_eq!(enumerator::enumerate(length, max_total).len(), 1);
        assert!(enumerator::enumerate(length, max_total + 1).is_empty());
    }
}

/// Replies flow from prompt parsing straight into a search.
#[tokio::test]
async fn parsed_replies_drive_a_search() {
    let Ok(Reply::Value(length)) = input::read_reply(" 2 \n") else {
        panic!("length should parse");
    };
    let Ok(Reply::Value(total)) = input::read_reply("+10") else {
        panic!("total should parse");
    };

    let finder = Finder::from_config(&Config::default());
    assert_eq!(finder.strategy(), Strategy::DepthFirst);

    let found = finder
        .find(SearchRequest::new(length as usize, total))
        .await
        .unwrap();
    let rendered: Vec<String> = found.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["[1 9]", "[2 8]", "[3 7]", "[4 6]"]);
}
