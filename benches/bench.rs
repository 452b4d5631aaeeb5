// Criterion benchmarks for Shabbat Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shabbat_match::core::{
    distance::{travel_minutes, Neighborhood},
    explain::explain,
    scoring::calculate_total_score,
    GreedyMatcher, MatchingEngine,
};
use shabbat_match::models::{
    ContributionRange, DietaryRequirement, GuestRequest, HostContribution, HostOffer, KosherLevel,
    MatchingPolicy, StyleProfile, TravelLimit,
};

fn create_guest(id: usize) -> GuestRequest {
    GuestRequest {
        id: format!("g{}", id),
        full_name: format!("Guest {}", id),
        party_size: 1 + (id % 3) as u32,
        neighborhood: Neighborhood::ALL[id % 14].label().to_string(),
        max_travel: if id % 4 == 0 { TravelLimit::NoLimit } else { TravelLimit::Thirty },
        languages: vec!["English".to_string()],
        dietary: if id % 3 == 0 {
            DietaryRequirement::KosherHouse
        } else {
            DietaryRequirement::KosherTakeout
        },
        contribution: ContributionRange::TenToTwentyFive,
        style: StyleProfile::new(1 + (id % 5) as u8, 1 + (id * 2 % 5) as u8, 3),
        is_flagged: false,
        no_show_count: 0,
    }
}

fn create_host(id: usize) -> HostOffer {
    HostOffer {
        id: format!("h{}", id),
        full_name: format!("Host {}", id),
        seats_available: 4 + (id % 5) as u32,
        neighborhood: Neighborhood::ALL[(id * 3) % 14].label().to_string(),
        languages: vec!["English".to_string(), "Spanish".to_string()],
        kosher_level: if id % 2 == 0 { KosherLevel::FullKosher } else { KosherLevel::MixedDishes },
        contribution: HostContribution::NoContribution,
        style: StyleProfile::new(3, 1 + (id % 5) as u8, 1 + (id * 3 % 5) as u8),
    }
}

fn bench_travel_minutes(c: &mut Criterion) {
    c.bench_function("travel_minutes", |b| {
        b.iter(|| travel_minutes(black_box("Upper West Side"), black_box("Financial District")));
    });
}

fn bench_pair_scoring(c: &mut Criterion) {
    let guest = create_guest(7);
    let host = create_host(3);
    let policy = MatchingPolicy::default();

    c.bench_function("calculate_total_score", |b| {
        b.iter(|| calculate_total_score(black_box(&guest), black_box(&host), 6, 120, &policy));
    });

    c.bench_function("explain", |b| {
        b.iter(|| explain(black_box(&guest), black_box(&host)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let policy = MatchingPolicy::default();
    let mut group = c.benchmark_group("matching");

    for guest_count in [10, 50, 100, 500].iter() {
        let guests: Vec<GuestRequest> = (0..*guest_count).map(create_guest).collect();
        let hosts: Vec<HostOffer> = (0..(*guest_count / 4).max(1)).map(create_host).collect();

        group.bench_with_input(
            BenchmarkId::new("generate_matches", guest_count),
            guest_count,
            |b, _| {
                b.iter(|| {
                    GreedyMatcher.generate_matches(
                        black_box(&guests),
                        black_box(&hosts),
                        black_box(&policy),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_travel_minutes,
    bench_pair_scoring,
    bench_matching
);
criterion_main!(benches);
