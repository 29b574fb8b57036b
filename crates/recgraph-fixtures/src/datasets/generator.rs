//! Synthetic corpus generator.
//!
//! Builds a self-consistent graph of users, items, qualities, categories,
//! and ratings at a configured scale. Population runs in dependency order:
//! the four entity collections are created first, independent of each other,
//! then qualities and categories are attached to the items, then ratings are
//! woven between users and items under a single shared id sequence.
//!
//! Content is drawn from a generator-owned seeded RNG, so the same
//! configuration reproduces the same corpus.

use std::collections::HashMap;
use std::time::Instant;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use uuid::Uuid;

use recgraph_core::{
    Category, CategoryId, ElementKind, Importance, Item, ItemId, Quality, QualityId, Rating,
    RatingId, Star, User, UserId,
};

use super::RecDataset;
use crate::config::{FixtureCounts, GeneratorConfig};

/// Fewest qualities attached to any item.
pub const MIN_QUALITIES_PER_ITEM: usize = 5;

/// Most qualities attached to any item.
pub const MAX_QUALITIES_PER_ITEM: usize = 15;

/// Most ratings any single user authors.
pub const MAX_RATINGS_PER_USER: usize = 65;

/// Generator for synthetic recommendation corpora.
///
/// Owns its random source, its rating id counter, and the monotonic start
/// instant used for elapsed-time reporting; nothing about generation is
/// ambient process state.
pub struct DatasetGenerator {
    config: GeneratorConfig,
    /// Effective scale after range substitution.
    scale: u64,
    counts: FixtureCounts,
    rng: ChaCha8Rng,
    started: Instant,
    next_rating_id: RatingId,
}

impl DatasetGenerator {
    /// Generator with the given debug flag and scale, default seed.
    pub fn new(debug: bool, scale: i64) -> Self {
        Self::with_config(GeneratorConfig::new(debug, scale))
    }

    /// Generator from a full configuration.
    ///
    /// Never fails: an out-of-range scale is substituted, not rejected.
    pub fn with_config(config: GeneratorConfig) -> Self {
        let scale = config.effective_scale();
        Self {
            scale,
            counts: FixtureCounts::for_scale(scale),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            started: Instant::now(),
            next_rating_id: 0,
            config,
        }
    }

    /// Effective scale this generator populates at.
    pub fn scale(&self) -> u64 {
        self.scale
    }

    /// Build the complete corpus.
    ///
    /// Blocks until every population phase is done. Consumes the generator:
    /// once the dataset is handed out, nothing can mutate it further.
    pub fn generate(mut self) -> RecDataset {
        let users = self.populate_users();
        let items = self.populate_items();
        let qualities = self.populate_qualities();
        let categories = self.populate_categories();

        // Sized for the expected draw average so multi-million-rating
        // corpora do not rehash mid-population.
        let expected_ratings = self.counts.users * (MAX_RATINGS_PER_USER + 1) / 2;
        let mut dataset = RecDataset {
            users,
            items,
            qualities,
            categories,
            ratings: HashMap::with_capacity(expected_ratings),
            scale: self.scale,
            config: self.config.clone(),
        };

        self.assign_qualities(&mut dataset);
        self.assign_categories(&mut dataset);
        self.create_ratings(&mut dataset);

        if self.config.debug {
            info!(
                elapsed_s = self.started.elapsed().as_secs(),
                "corpus generation done"
            );
        }

        dataset
    }

    fn populate_users(&mut self) -> HashMap<UserId, User> {
        let amount = self.counts.users;
        if self.config.debug {
            info!(amount, elapsed_ms = self.elapsed_ms(), "creating users");
        }

        let mut users = HashMap::with_capacity(amount);
        for i in 0..amount as UserId {
            users.insert(i, User::new(i, format!("User #{i}")));
        }
        users
    }

    fn populate_items(&mut self) -> HashMap<ItemId, Item> {
        let amount = self.counts.items;
        if self.config.debug {
            info!(amount, elapsed_ms = self.elapsed_ms(), "creating items");
        }

        let mut items = HashMap::with_capacity(amount);
        for i in 0..amount as ItemId {
            let mut item = Item::new(i, format!("Item #{i}"));
            item.set_description(format!("created at {}ms", self.elapsed_ms()));
            items.insert(i, item);
        }
        items
    }

    fn populate_qualities(&mut self) -> HashMap<QualityId, Quality> {
        let amount = self.counts.qualities;
        if self.config.debug {
            info!(amount, elapsed_ms = self.elapsed_ms(), "creating qualities");
        }

        let mut qualities = HashMap::with_capacity(amount);
        for i in 0..amount as QualityId {
            let mut quality = Quality::new(i, format!("Quality #{i}"));
            quality.set_importance(self.random_importance());
            quality.set_description(self.unique_token());
            qualities.insert(i, quality);
        }
        qualities
    }

    fn populate_categories(&mut self) -> HashMap<CategoryId, Category> {
        let amount = self.counts.categories;
        if self.config.debug {
            info!(amount, elapsed_ms = self.elapsed_ms(), "creating categories");
        }

        let mut categories = HashMap::with_capacity(amount);
        for i in 0..amount as CategoryId {
            let mut category = Category::new(i, format!("Category #{i}"));
            category.set_description(self.unique_token());
            categories.insert(i, category);
        }
        categories
    }

    /// Attach 5 to 15 qualities to every item, both sides of each link in
    /// one step. Draws are independent: the same quality can be attached to
    /// an item more than once, and both sides keep the duplicate entries.
    fn assign_qualities(&mut self, dataset: &mut RecDataset) {
        if self.config.debug {
            info!(
                elapsed_ms = self.elapsed_ms(),
                "attaching qualities to items ({MIN_QUALITIES_PER_ITEM}-{MAX_QUALITIES_PER_ITEM} per item)"
            );
        }

        for item_id in 0..self.counts.items as ItemId {
            let amount =
                self.random_in(MIN_QUALITIES_PER_ITEM as u64, MAX_QUALITIES_PER_ITEM as u64);
            for _ in 0..amount {
                let quality_id = self.random_quality_id();

                let item = dataset
                    .items
                    .get_mut(&item_id)
                    .expect("items are populated before quality assignment");
                item.add_quality(quality_id);

                let quality = dataset
                    .qualities
                    .get_mut(&quality_id)
                    .expect("qualities are populated before quality assignment");
                quality.add_item(item_id);
            }
        }
    }

    /// File every item into exactly one category. The draw ranges over
    /// `[1, category_count - 1]`: category 0 is never assigned.
    fn assign_categories(&mut self, dataset: &mut RecDataset) {
        if self.config.debug {
            info!(
                elapsed_ms = self.elapsed_ms(),
                "filing items into categories (one per item)"
            );
        }

        for item_id in 0..self.counts.items as ItemId {
            let category_id = self.random_in(1, self.counts.categories as u64 - 1);

            let item = dataset
                .items
                .get_mut(&item_id)
                .expect("items are populated before category assignment");
            item.add_category(category_id);

            let category = dataset
                .categories
                .get_mut(&category_id)
                .expect("categories are populated before category assignment");
            category.add_element(item_id, ElementKind::Item);
        }
    }

    /// Author 0 to 65 ratings per user against uniformly random items, each
    /// under the next id of the shared sequence. Draws are independent: a
    /// user can rate the same item more than once, and every draw produces
    /// its own rating.
    fn create_ratings(&mut self, dataset: &mut RecDataset) {
        if self.config.debug {
            info!(
                elapsed_ms = self.elapsed_ms(),
                "generating ratings (0-{MAX_RATINGS_PER_USER} per user)"
            );
        }

        for user_id in 0..self.counts.users as UserId {
            let amount = self.random_in(0, MAX_RATINGS_PER_USER as u64);
            for _ in 0..amount {
                let item_id = self.random_in(0, self.counts.items as u64 - 1);
                let rating_id = self.next_rating_id;
                self.next_rating_id += 1;

                let rating = Rating::new(rating_id, user_id, item_id, self.random_star());

                dataset
                    .users
                    .get_mut(&user_id)
                    .expect("users are populated before rating generation")
                    .add_rating(rating_id);
                dataset
                    .items
                    .get_mut(&item_id)
                    .expect("items are populated before rating generation")
                    .add_rating(rating_id);
                dataset.ratings.insert(rating_id, rating);
            }
        }

        if self.config.debug {
            info!(
                ratings = dataset.ratings.len(),
                elapsed_ms = self.elapsed_ms(),
                "finished generating ratings"
            );
        }
    }

    /// Uniform draw from `[min, max]`, both ends inclusive.
    fn random_in(&mut self, min: u64, max: u64) -> u64 {
        self.rng.gen_range(min..=max)
    }

    /// Uniform pick from the importance levels.
    fn random_importance(&mut self) -> Importance {
        let all = Importance::all();
        all[self.random_in(0, all.len() as u64 - 1) as usize]
    }

    /// Uniform pick from the star levels.
    fn random_star(&mut self) -> Star {
        let all = Star::all();
        all[self.random_in(0, all.len() as u64 - 1) as usize]
    }

    /// Uniform pick of an existing quality by index into the id space.
    fn random_quality_id(&mut self) -> QualityId {
        self.random_in(0, self.counts.qualities as u64 - 1)
    }

    /// UUID-shaped filler token drawn from the generator's own RNG.
    ///
    /// Used only as description filler, never as an entity key.
    fn unique_token(&mut self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        // Set version to 4 (random) and variant to RFC 4122.
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Uuid::from_bytes(bytes).to_string()
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

impl Default for DatasetGenerator {
    /// Equivalent to `DatasetGenerator::new(false, 500)`.
    fn default() -> Self {
        Self::with_config(GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::OnceLock;

    use recgraph_core::Element;

    use super::*;

    /// Shared corpus at the smallest accepted scale; building one per test
    /// would dominate the suite's runtime.
    fn corpus() -> &'static RecDataset {
        static CORPUS: OnceLock<RecDataset> = OnceLock::new();
        CORPUS.get_or_init(|| DatasetGenerator::new(false, 300).generate())
    }

    #[test]
    fn test_counts_follow_scale_multipliers() {
        let dataset = corpus();
        assert_eq!(dataset.scale(), 300);
        assert_eq!(dataset.user_count(), 75_000);
        assert_eq!(dataset.item_count(), 30_000);
        assert_eq!(dataset.quality_count(), 750);
        assert_eq!(dataset.category_count(), 30);
    }

    #[test]
    fn test_ids_are_sequential_from_zero() {
        let dataset = corpus();
        for i in 0..dataset.user_count() as u64 {
            assert_eq!(dataset.users()[&i].id(), i);
        }
        for i in 0..dataset.quality_count() as u64 {
            assert_eq!(dataset.qualities()[&i].id(), i);
        }
    }

    #[test]
    fn test_quality_links_within_bounds() {
        for item in corpus().items().values() {
            let links = item.qualities().len();
            assert!(
                (MIN_QUALITIES_PER_ITEM..=MAX_QUALITIES_PER_ITEM).contains(&links),
                "item {} carries {} quality links",
                item.id(),
                links
            );
        }
    }

    #[test]
    fn test_duplicate_quality_links_are_kept() {
        // Draws are independent, so across 30k items some item must carry
        // the same quality twice; the duplicate entries survive on both
        // sides of the link.
        let dataset = corpus();
        let duplicated = dataset.items().values().find_map(|item| {
            let mut seen = HashSet::new();
            item.qualities()
                .iter()
                .find(|q| !seen.insert(**q))
                .map(|q| (item.id(), *q))
        });
        let (item_id, quality_id) = duplicated.expect("no duplicate quality link in corpus");

        let on_item = dataset.items()[&item_id]
            .qualities()
            .iter()
            .filter(|q| **q == quality_id)
            .count();
        let on_quality = dataset.qualities()[&quality_id]
            .items()
            .iter()
            .filter(|i| **i == item_id)
            .count();
        assert!(on_item >= 2);
        assert_eq!(on_item, on_quality);
    }

    #[test]
    fn test_every_item_in_exactly_one_category() {
        let dataset = corpus();
        for item in dataset.items().values() {
            assert_eq!(item.categories().len(), 1);
            let category_id = item.categories()[0];
            assert_ne!(category_id, 0, "reserved category assigned");
            assert!(dataset.categories()[&category_id].contains(item.id()));
        }
    }

    #[test]
    fn test_category_zero_stays_empty() {
        assert!(corpus().categories()[&0].elements().is_empty());
    }

    #[test]
    fn test_rating_ids_contiguous_and_mirrored() {
        let dataset = corpus();
        for id in 0..dataset.rating_count() as u64 {
            let rating = dataset.ratings().get(&id).expect("gap in rating ids");
            assert_eq!(rating.id(), id);
            assert!(dataset.users()[&rating.user()].ratings().contains(&id));
            assert!(dataset.items()[&rating.item()].ratings().contains(&id));
        }
    }

    #[test]
    fn test_ratings_per_user_bounded() {
        for user in corpus().users().values() {
            assert!(user.ratings().len() <= MAX_RATINGS_PER_USER);
        }
    }

    #[test]
    fn test_duplicate_user_item_ratings_are_kept() {
        // No (user, item) dedup: with up to 65 draws over 30k items, some
        // user ends up rating the same item twice.
        let dataset = corpus();
        let duplicated = dataset.users().values().any(|user| {
            let mut seen = HashSet::new();
            user.ratings()
                .iter()
                .any(|r| !seen.insert(dataset.ratings()[r].item()))
        });
        assert!(duplicated, "no duplicate (user, item) rating in corpus");
    }

    #[test]
    fn test_descriptions_are_filled() {
        let dataset = corpus();
        let quality = &dataset.qualities()[&0];
        let token = quality.description().expect("quality without description");
        assert!(Uuid::parse_str(token).is_ok());

        let item = &dataset.items()[&0];
        assert!(item.description().unwrap().starts_with("created at "));
    }

    #[test]
    fn test_validate_passes_on_generated_corpus() {
        corpus().validate().unwrap();
    }

    #[test]
    fn test_same_seed_reproduces_corpus() {
        let config = GeneratorConfig {
            debug: false,
            scale: 300,
            seed: 7,
        };
        let first = DatasetGenerator::with_config(config.clone()).generate();
        let second = DatasetGenerator::with_config(config).generate();

        assert_eq!(first.summary(), second.summary());
        assert_eq!(
            first.items()[&0].qualities(),
            second.items()[&0].qualities()
        );
        assert_eq!(
            first.qualities()[&0].description(),
            second.qualities()[&0].description()
        );
    }

    #[test]
    fn test_out_of_range_scale_generates_at_default() {
        let generator = DatasetGenerator::new(false, 20);
        assert_eq!(generator.scale(), 500);
    }

    #[test]
    fn test_default_generator_uses_default_scale() {
        assert_eq!(DatasetGenerator::default().scale(), 500);
    }
}
