use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Platform, Post};

const PLATFORMS: [Platform; 4] = [
    Platform::Instagram,
    Platform::Tiktok,
    Platform::Youtube,
    Platform::Facebook,
];

const TITLES: [&str; 8] = [
    "Behind the scenes",
    "New drop announcement",
    "Customer spotlight",
    "Weekend giveaway",
    "Product tutorial",
    "Creator collab",
    "Team Q&A",
    "Launch recap",
];

/// Deterministic batch for demos and dashboards without live data.
/// Posts are spaced six hours apart, newest first from `anchor`.
pub fn generate_sample_posts(count: usize, seed: u64, anchor: DateTime<Utc>) -> Vec<Post> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut posts = Vec::with_capacity(count);

    for idx in 0..count {
        let platform = PLATFORMS[rng.gen_range(0..PLATFORMS.len())];
        let reach = 10f64.powf(rng.gen_range(2.0..5.0));
        let likes = (reach * rng.gen_range(0.01..0.12)) as u64;
        let comments = sample_interaction(&mut rng, likes, 0.02, 0.8);
        let shares = sample_interaction(&mut rng, likes, 0.01, 0.5);

        let mut post = Post::new(format!("sample_{}", idx), platform, likes, comments, shares);
        post.impressions = Some(reach as u64);
        post.created_at = anchor - Duration::hours(idx as i64 * 6);
        post.title = Some(TITLES[rng.gen_range(0..TITLES.len())].to_string());
        posts.push(post);
    }

    posts
}

fn sample_interaction(rng: &mut StdRng, likes: u64, min_ratio: f64, max_ratio: f64) -> u64 {
    // Occasionally a post is conversation- or share-heavy relative to likes.
    let ratio = if rng.gen::<f64>() < 0.15 {
        rng.gen_range(max_ratio * 0.6..max_ratio * 1.5)
    } else {
        rng.gen_range(min_ratio..max_ratio * 0.4)
    };
    (likes as f64 * ratio) as u64
}
