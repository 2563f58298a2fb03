use chrono::{Duration, TimeZone, Utc};
use engagement_heatmap::sample::generate_sample_posts;
use engagement_heatmap::scoring::{
    EngagementScorer, HeatmapSummary, Intensity, MetricDistribution, Mood, MoodClassifier,
};
use engagement_heatmap::{score_posts, sort_timeline, Platform, Post};

fn post(id: &str, likes: u64, comments: u64, shares: u64) -> Post {
    Post::new(id, Platform::Instagram, likes, comments, shares)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[test]
fn percentile_rank_counts_values_strictly_below() {
    let distribution = MetricDistribution::from_values(vec![90, 10, 50]);

    assert!((distribution.percentile_rank(10) - 0.0).abs() < 1e-6);
    assert!((distribution.percentile_rank(50) - 100.0 / 3.0).abs() < 1e-6);
    assert!((distribution.percentile_rank(90) - 200.0 / 3.0).abs() < 1e-6);
}

#[test]
fn percentile_rank_ties_take_first_position() {
    let distribution = MetricDistribution::from_values(vec![0, 0, 0, 7]);

    assert!((distribution.percentile_rank(0) - 0.0).abs() < 1e-6);
    assert!((distribution.percentile_rank(7) - 75.0).abs() < 1e-6);
}

#[test]
fn percentile_rank_above_every_value_is_full() {
    let distribution = MetricDistribution::from_values(vec![1, 2, 3]);
    assert!((distribution.percentile_rank(10) - 100.0).abs() < 1e-6);

    let empty = MetricDistribution::from_values(Vec::new());
    assert!(empty.is_empty());
    assert!((empty.percentile_rank(5) - 0.0).abs() < 1e-6);
}

#[test]
fn three_post_batch_matches_hand_arithmetic() {
    let posts = vec![post("a", 10, 0, 0), post("b", 50, 0, 0), post("c", 90, 0, 0)];
    let scored = score_posts(&posts);

    let like_scores: Vec<f64> = scored.iter().map(|p| round1(p.like_score)).collect();
    assert_eq!(like_scores, vec![0.0, 33.3, 66.7]);

    for entry in &scored {
        assert!((entry.comment_score - 0.0).abs() < 1e-6);
        assert!((entry.share_score - 0.0).abs() < 1e-6);
    }

    let engagement: Vec<f64> = scored.iter().map(|p| round1(p.engagement_score)).collect();
    assert_eq!(engagement, vec![0.0, 11.1, 22.2]);

    assert_eq!(scored[0].mood, Mood::Quiet);
    assert_eq!(scored[1].mood, Mood::Quiet);
    assert_eq!(scored[2].mood, Mood::Neutral);
    assert_eq!(scored[2].total_engagement, 90);
}

#[test]
fn identical_metrics_score_zero_regardless_of_magnitude() {
    for magnitude in [0u64, 5, 1_000_000] {
        let posts: Vec<Post> = (0..4)
            .map(|idx| post(&format!("p{}", idx), magnitude, magnitude, magnitude))
            .collect();
        let scored = score_posts(&posts);

        for entry in &scored {
            assert!((entry.engagement_score - 0.0).abs() < 1e-6);
        }
    }
}

#[test]
fn raising_likes_never_lowers_like_score() {
    let mut previous = -1.0;
    for likes in (0..=200).step_by(5) {
        let posts = vec![post("tracked", likes, 3, 1), post("b", 50, 3, 1), post("c", 90, 3, 1)];
        let scored = score_posts(&posts);
        assert!(scored[0].like_score >= previous);
        previous = scored[0].like_score;
    }
}

#[test]
fn comment_heavy_post_is_buzzing_even_at_top_of_batch() {
    let mut posts: Vec<Post> = (1..10).map(|idx| post(&format!("p{}", idx), idx, 1, 1)).collect();
    posts.push(post("loud", 100, 60, 50));

    let scored = score_posts(&posts);
    let loud = &scored[9];

    assert!(loud.engagement_score >= 80.0);
    assert_eq!(loud.mood, Mood::Buzzing);
    assert_eq!(loud.intensity, Intensity::High);
    assert_eq!(loud.emoji, Mood::Buzzing.style().emoji);
}

#[test]
fn share_heavy_post_is_trending() {
    let scored = score_posts(&[post("shared", 100, 5, 40)]);
    assert_eq!(scored[0].mood, Mood::Trending);
    assert_eq!(scored[0].intensity, Intensity::High);
    assert_eq!(scored[0].description, Mood::Trending.style().description);
}

#[test]
fn override_minimums_are_strict() {
    let classifier = MoodClassifier::default();

    assert_eq!(classifier.pattern_override(0, 10, 0), None);
    assert_eq!(classifier.pattern_override(0, 11, 0), Some(Mood::Buzzing));
    assert_eq!(classifier.pattern_override(0, 0, 5), None);
    assert_eq!(classifier.pattern_override(0, 0, 6), Some(Mood::Trending));
    assert_eq!(classifier.pattern_override(100, 50, 30), None);
}

#[test]
fn ladder_boundaries_are_inclusive() {
    let classifier = MoodClassifier::default();

    assert_eq!(classifier.ladder_mood(100.0), Mood::Viral);
    assert_eq!(classifier.ladder_mood(80.0), Mood::Viral);
    assert_eq!(classifier.ladder_mood(79.99), Mood::Loved);
    assert_eq!(classifier.ladder_mood(60.0), Mood::Loved);
    assert_eq!(classifier.ladder_mood(40.0), Mood::Good);
    assert_eq!(classifier.ladder_mood(20.0), Mood::Neutral);
    assert_eq!(classifier.ladder_mood(19.99), Mood::Quiet);
    assert_eq!(classifier.ladder_mood(0.0), Mood::Quiet);

    assert_eq!(Mood::Good.intensity(), Intensity::Medium);
    assert_eq!(Mood::Neutral.intensity(), Intensity::Low);
}

#[test]
fn empty_batch_scores_to_empty() {
    let scorer = EngagementScorer::default();
    assert!(scorer.score(&[]).is_empty());

    let summary = HeatmapSummary::from_scored(&[]);
    assert_eq!(summary.average_score, 0);
    assert_eq!(summary.total_posts, 0);
    assert_eq!(summary.dominant_mood, None);
}

#[test]
fn output_mirrors_input_order_and_passes_fields_through() {
    let mut first = post("z-last-alphabetically", 5, 0, 0);
    first.title = Some("Launch recap".to_string());
    first.impressions = Some(50);
    let mut second = post("a-first", 500, 0, 0);
    second.impressions = Some(0);

    let scored = score_posts(&[first, second]);

    assert_eq!(scored[0].post.id, "z-last-alphabetically");
    assert_eq!(scored[0].post.title.as_deref(), Some("Launch recap"));
    assert!((scored[0].engagement_rate.unwrap_or_default() - 0.1).abs() < 1e-6);
    assert_eq!(scored[1].post.id, "a-first");
    assert_eq!(scored[1].engagement_rate, None);
}

#[test]
fn scores_stay_within_bounds_for_sample_batches() {
    for seed in 0..5 {
        let posts = generate_sample_posts(40, seed, Utc::now());
        for entry in score_posts(&posts) {
            assert!(entry.engagement_score >= 0.0);
            assert!(entry.engagement_score <= 100.0);
        }
    }
}

#[test]
fn summary_rounds_average_and_picks_dominant_mood() {
    let posts = vec![post("a", 10, 0, 0), post("b", 50, 0, 0), post("c", 90, 0, 0)];
    let summary = HeatmapSummary::from_scored(&score_posts(&posts));

    assert_eq!(summary.average_score, 11);
    assert_eq!(summary.total_posts, 3);
    assert_eq!(summary.dominant_mood, Some(Mood::Quiet));
    assert_eq!(summary.count_for(Mood::Quiet), 2);
    assert_eq!(summary.count_for(Mood::Neutral), 1);
    assert_eq!(summary.count_for(Mood::Viral), 0);
}

#[test]
fn summary_ties_go_to_first_encountered_mood() {
    let buzzing = post("buzz", 100, 60, 0);
    let trending = post("trend", 100, 5, 40);

    let summary = HeatmapSummary::from_scored(&score_posts(&[buzzing.clone(), trending.clone()]));
    assert_eq!(summary.dominant_mood, Some(Mood::Buzzing));

    let summary = HeatmapSummary::from_scored(&score_posts(&[trending, buzzing]));
    assert_eq!(summary.dominant_mood, Some(Mood::Trending));
}

#[test]
fn timeline_order_keeps_scores_and_summary() {
    let anchor = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let mut posts = vec![post("old", 10, 0, 0), post("new", 50, 0, 0), post("mid", 90, 0, 0)];
    posts[0].created_at = anchor - Duration::days(2);
    posts[1].created_at = anchor;
    posts[2].created_at = anchor - Duration::days(1);

    let scored = score_posts(&posts);
    let before = HeatmapSummary::from_scored(&scored);

    let mut timeline = scored.clone();
    sort_timeline(&mut timeline);

    let ids: Vec<&str> = timeline.iter().map(|p| p.post.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
    for entry in &timeline {
        let original = scored.iter().find(|p| p.post.id == entry.post.id).unwrap();
        assert!((entry.engagement_score - original.engagement_score).abs() < 1e-6);
        assert_eq!(entry.mood, original.mood);
    }

    let after = HeatmapSummary::from_scored(&timeline);
    assert_eq!(after.average_score, before.average_score);
    assert_eq!(after.total_posts, before.total_posts);
    assert_eq!(after.dominant_mood, before.dominant_mood);
}
