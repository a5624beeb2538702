#![cfg(test)]
use combi_common::config::Config;
use combi_core::enumerator::{self, MAX_LENGTH, SearchRequest};
use combi_core::finder::{Finder, Strategy};
use combi_core::stream;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn channelled_matches_depth_first_everywhere() {
    for length in 1..=MAX_LENGTH {
        for total in 1..=45 {
            let request = SearchRequest::new(length, total);
            let streamed = stream::collect(request, 1).await.unwrap();
            assert_eq!(
                streamed,
                enumerator::enumerate(length, total),
                "length {length}, total {total}"
            );
        }
    }
}

#[tokio::test]
async fn consumer_sees_items_in_order_then_close() {
    let (mut rx, producer) = stream::spawn(SearchRequest::new(3, 15), 2);

    let mut received = Vec::new();
    while let Some(combination) = rx.recv().await {
        received.push(combination);
    }
    producer.await.unwrap();

    assert_eq!(received.len(), 8);
    assert!(received.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn channelled_finder_from_config() -> anyhow::Result<()> {
    let cfg = Config {
        channelled: true,
        capacity: 4,
        ..Config::default()
    };

    let finder = Finder::from_config(&cfg);
    assert_eq!(finder.strategy(), Strategy::Channelled { capacity: 4 });

    let found = finder.find(SearchRequest::new(4, 20)).await?;
    assert_eq!(found, enumerator::enumerate(4, 20));
    Ok(())
}

#[tokio::test]
async fn out_of_range_length_closes_immediately() -> anyhow::Result<()> {
    let found = stream::collect(SearchRequest::new(10, 45), 1).await?;
    assert!(found.is_empty());
    Ok(())
}
