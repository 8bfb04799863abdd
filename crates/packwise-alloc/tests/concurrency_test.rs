//! Concurrent calculations against a registry that is being replaced.

use rayon::prelude::*;

use packwise_alloc::service::{CalculateRequest, PackService, SetPacksRequest};

#[test]
fn test_calculations_use_one_snapshot_each() {
    let service = PackService::default();
    let coprime = SetPacksRequest {
        pack_sizes: vec![23, 31, 53],
    };
    let catalogue = SetPacksRequest {
        pack_sizes: vec![250, 500, 1000, 2000, 5000],
    };

    (0..64).into_par_iter().for_each(|i| {
        if i % 8 == 0 {
            let next = if i % 16 == 0 { &coprime } else { &catalogue };
            service.set_pack_sizes(next).unwrap();
            return;
        }
        let response = service.calculate(&CalculateRequest { amount: 501 }).unwrap();
        // Every size used must belong to the snapshot the response reports.
        for (size, _) in response.allocation.iter() {
            assert!(response.pack_sizes.contains(&size));
        }
        match response.pack_sizes.as_slice() {
            [53, 31, 23] => assert_eq!(response.overfill, 0),
            [5000, 2000, 1000, 500, 250] => assert_eq!(response.overfill, 249),
            other => panic!("unexpected snapshot {other:?}"),
        }
    });
}

#[test]
fn test_parallel_allocations_are_deterministic() {
    let service = PackService::default();
    let results: Vec<u64> = (0..32)
        .into_par_iter()
        .map(|_| {
            service
                .calculate(&CalculateRequest { amount: 12_001 })
                .unwrap()
                .total_packs
        })
        .collect();
    assert!(results.iter().all(|&packs| packs == 4));
}
