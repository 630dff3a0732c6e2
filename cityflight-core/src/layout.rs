use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};

use crate::rng::Lcg;
use crate::scene::{DRONE_SPAWN, LOGO_POINT};

pub const MAP_HALF_EXTENT: f32 = 12.0;
pub const DEFAULT_MARGIN: f32 = 1.0;
pub const RELAXED_MARGIN: f32 = 0.3;
pub const CITY_GRID_SEED: u32 = 12345;

pub const LOGO_CLEARANCE_RADIUS: f32 = 2.5;
pub const SPAWN_CLEARANCE_RADIUS: f32 = 1.5;
const BUILDING_ONE_CLEARANCE_RADIUS: f32 = 3.0;
const BUILDING_ONE_NEAR_CLEARANCE_RADIUS: f32 = 2.5;
const DEFAULT_BUILDING_ONE: Vec2 = vec2(8.0, 7.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExclusionZone {
    pub center: Vec2,
    pub radius: f32,
}

impl ExclusionZone {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// True when a circle of `radius` at `point` overlaps this zone grown by `margin`.
    pub fn intersects(&self, point: Vec2, radius: f32, margin: f32) -> bool {
        self.center.distance(point) < self.radius + radius + margin
    }
}

/// Axis-aligned water rectangle on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterArea {
    pub center: Vec2,
    pub width: f32,
    pub depth: f32,
}

impl WaterArea {
    pub const fn new(center: Vec2, width: f32, depth: f32) -> Self {
        Self {
            center,
            width,
            depth,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (point.x - self.center.x).abs() < self.width / 2.0
            && (point.y - self.center.y).abs() < self.depth / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) < self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Ground points no filler may be centred near. The logo and the drone spawn apply to every
/// batch; building one only to the regions that sit around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeepClear {
    pub logo: Vec2,
    pub spawn: Vec2,
    pub building_one: Option<Vec2>,
}

impl Default for KeepClear {
    fn default() -> Self {
        Self {
            logo: vec2(LOGO_POINT.x, LOGO_POINT.z),
            spawn: vec2(DRONE_SPAWN.x, DRONE_SPAWN.z),
            building_one: Some(DEFAULT_BUILDING_ONE),
        }
    }
}

impl KeepClear {
    pub fn blocks(&self, point: Vec2) -> bool {
        Circle::new(self.logo, LOGO_CLEARANCE_RADIUS).contains(point)
            || Circle::new(self.spawn, SPAWN_CLEARANCE_RADIUS).contains(point)
    }

    fn around_building_one(&self, radius: f32) -> Vec<Circle> {
        self.building_one
            .map(|center| Circle::new(center, radius))
            .into_iter()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructurePart {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub offset: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedStructure {
    pub origin: Vec2,
    pub radius: f32,
    pub parts: Vec<StructurePart>,
}

impl PlacedStructure {
    pub fn height(&self) -> f32 {
        self.parts.iter().map(|part| part.height).fold(0.0, f32::max)
    }
}

/// A uniform draw `min + r * span`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f32,
    pub span: f32,
}

impl Span {
    pub const fn new(min: f32, span: f32) -> Self {
        Self { min, span }
    }

    fn draw(&self, rng: &mut Lcg) -> f32 {
        rng.range(self.min, self.span)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: Span,
    pub depth: Span,
    pub height: Span,
}

impl Footprint {
    pub const fn new(width: Span, depth: Span, height: Span) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    pub const fn square(size: Span, height: Span) -> Self {
        Self::new(size, size, height)
    }
}

/// Inclusive float range walked by index so the cell list does not drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steps {
    pub start: f32,
    pub end: f32,
    pub step: f32,
}

impl Steps {
    pub const fn new(start: f32, end: f32, step: f32) -> Self {
        Self { start, end, step }
    }

    pub fn values(&self) -> Vec<f32> {
        if !(self.step > 0.0) || self.end < self.start {
            return vec![self.start];
        }
        let count = ((self.end - self.start) / self.step + 1e-4).floor() as usize + 1;
        (0..count)
            .map(|index| self.start + index as f32 * self.step)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridOrder {
    XOuter,
    ZOuter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cells {
    Grid {
        xs: Steps,
        zs: Steps,
        order: GridOrder,
    },
    Points(Vec<Vec2>),
}

impl Cells {
    pub fn positions(&self) -> Vec<Vec2> {
        match self {
            Cells::Grid { xs, zs, order } => {
                let xs = xs.values();
                let zs = zs.values();
                let mut cells = Vec::with_capacity(xs.len() * zs.len());
                match order {
                    GridOrder::XOuter => {
                        for &x in &xs {
                            for &z in &zs {
                                cells.push(vec2(x, z));
                            }
                        }
                    }
                    GridOrder::ZOuter => {
                        for &z in &zs {
                            for &x in &xs {
                                cells.push(vec2(x, z));
                            }
                        }
                    }
                }
                cells
            }
            Cells::Points(points) => points.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartCount {
    /// `r > 0.5 -> 2`, else `r > 0.3 -> 3`, else 1. The second draw only happens on the else branch.
    Varied,
    Fixed(usize),
}

/// Skips a share of the cells inside `area` to thin out a crowded strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thinning {
    pub area: Rect,
    pub keep_below: f32,
}

/// One placement batch with its own generator sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub cells: Cells,
    pub jitter: f32,
    pub footprint: Footprint,
    pub parts: PartCount,
    pub keep_clear: Vec<Circle>,
    pub thinning: Option<Thinning>,
}

impl Batch {
    pub fn grid(xs: Steps, zs: Steps, order: GridOrder, footprint: Footprint) -> Self {
        Self {
            cells: Cells::Grid { xs, zs, order },
            jitter: 0.0,
            footprint,
            parts: PartCount::Varied,
            keep_clear: Vec::new(),
            thinning: None,
        }
    }

    pub fn points(points: Vec<Vec2>, footprint: Footprint) -> Self {
        Self {
            cells: Cells::Points(points),
            jitter: 0.0,
            footprint,
            parts: PartCount::Varied,
            keep_clear: Vec::new(),
            thinning: None,
        }
    }

    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_parts(mut self, parts: PartCount) -> Self {
        self.parts = parts;
        self
    }

    pub fn keeping_clear(mut self, circles: &[Circle]) -> Self {
        self.keep_clear.extend_from_slice(circles);
        self
    }

    pub fn with_thinning(mut self, thinning: Thinning) -> Self {
        self.thinning = Some(thinning);
        self
    }
}

/// A named region: one seed shared by its batches, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSpec {
    pub name: &'static str,
    pub seed: u32,
    pub batches: Vec<Batch>,
}

/// Scene-wide placement rules shared by every region.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRules {
    pub water: WaterArea,
    pub margin: f32,
    pub relaxed_area: Option<(Rect, f32)>,
    pub half_extent: f32,
    pub keep_clear: KeepClear,
}

impl Default for LayoutRules {
    fn default() -> Self {
        Self {
            water: WaterArea::new(vec2(-8.0, 0.0), 8.4, 24.0),
            margin: DEFAULT_MARGIN,
            // In front of building one the street is tighter.
            relaxed_area: Some((
                Rect::new(vec2(3.0, 9.0), vec2(13.0, f32::INFINITY)),
                RELAXED_MARGIN,
            )),
            half_extent: MAP_HALF_EXTENT,
            keep_clear: KeepClear::default(),
        }
    }
}

impl LayoutRules {
    pub fn for_scene(water: WaterArea, keep_clear: KeepClear) -> Self {
        Self {
            water,
            keep_clear,
            ..Self::default()
        }
    }

    /// Margin applied around exclusion zones for a candidate at `point`.
    pub fn margin_at(&self, point: Vec2) -> f32 {
        match self.relaxed_area {
            Some((area, margin)) if area.contains(point) => margin,
            _ => self.margin,
        }
    }

    pub fn within_map(&self, point: Vec2) -> bool {
        point.x.abs() <= self.half_extent && point.y.abs() <= self.half_extent
    }

    pub fn is_free(&self, point: Vec2, radius: f32, zones: &[ExclusionZone]) -> bool {
        if self.water.contains(point) || !self.within_map(point) {
            return false;
        }
        let margin = self.margin_at(point);
        !zones
            .iter()
            .any(|zone| zone.intersects(point, radius, margin))
    }
}

/// Places the filler buildings of the main city grid for `seed`.
pub fn generate(seed: u32, zones: &[ExclusionZone]) -> Vec<PlacedStructure> {
    let region = RegionSpec {
        name: "city-grid",
        seed,
        batches: vec![city_grid_batch()],
    };
    generate_region(&region, &LayoutRules::default(), zones)
}

pub fn generate_region(
    region: &RegionSpec,
    rules: &LayoutRules,
    zones: &[ExclusionZone],
) -> Vec<PlacedStructure> {
    let mut rng = Lcg::new(region.seed);
    let mut placed = Vec::new();

    for batch in &region.batches {
        for cell in batch.cells.positions() {
            if let Some(thinning) = batch.thinning {
                if thinning.area.contains(cell) && rng.next_f32() > thinning.keep_below {
                    continue;
                }
            }

            let origin = if batch.jitter > 0.0 {
                let dx = rng.centered(batch.jitter);
                let dz = rng.centered(batch.jitter);
                cell + vec2(dx, dz)
            } else {
                cell
            };

            let width = batch.footprint.width.draw(&mut rng);
            let depth = batch.footprint.depth.draw(&mut rng);
            let height = batch.footprint.height.draw(&mut rng);
            let radius = width.max(depth) / 2.0;

            let blocked = rules.keep_clear.blocks(origin)
                || batch.keep_clear.iter().any(|circle| circle.contains(origin));
            if blocked || !rules.is_free(origin, radius, zones) {
                continue;
            }

            let part_count = match batch.parts {
                PartCount::Fixed(count) => count,
                PartCount::Varied => {
                    if rng.next_f32() > 0.5 {
                        2
                    } else if rng.next_f32() > 0.3 {
                        3
                    } else {
                        1
                    }
                }
            };

            let parts = (0..part_count)
                .map(|_| StructurePart {
                    width: width * rng.range(0.7, 0.6),
                    depth: depth * rng.range(0.7, 0.6),
                    height: height * rng.range(0.8, 0.4),
                    offset: vec2(rng.centered(width * 0.5), rng.centered(depth * 0.5)),
                })
                .collect();

            placed.push(PlacedStructure {
                origin,
                radius,
                parts,
            });
        }
    }

    placed
}

/// Every region of the city, each with its own fixed seed, concatenated in region order.
pub fn generate_city(rules: &LayoutRules, zones: &[ExclusionZone]) -> Vec<PlacedStructure> {
    city_regions(&rules.keep_clear)
        .iter()
        .flat_map(|region| generate_region(region, rules, zones))
        .collect()
}

fn city_grid_batch() -> Batch {
    let size = Span::new(0.7, 1.0);
    Batch::grid(
        Steps::new(-MAP_HALF_EXTENT, MAP_HALF_EXTENT, 2.5),
        Steps::new(-MAP_HALF_EXTENT, MAP_HALF_EXTENT, 2.5),
        GridOrder::XOuter,
        Footprint::square(size, Span::new(0.4, 0.9)),
    )
}

/// The fixed region table. Only building one's clearance comes from the scene here.
pub fn city_regions(keep_clear: &KeepClear) -> Vec<RegionSpec> {
    let building_one = keep_clear.around_building_one(BUILDING_ONE_CLEARANCE_RADIUS);
    let building_one_near = keep_clear.around_building_one(BUILDING_ONE_NEAR_CLEARANCE_RADIUS);

    let standard = Footprint::square(Span::new(0.7, 1.0), Span::new(0.4, 0.8));
    let compact = Footprint::square(Span::new(0.5, 0.9), Span::new(0.3, 0.6));

    vec![
        RegionSpec {
            name: "city-grid",
            seed: CITY_GRID_SEED,
            batches: vec![city_grid_batch()],
        },
        RegionSpec {
            name: "behind-building-one",
            seed: 54321,
            batches: vec![
                Batch::grid(
                    Steps::new(-3.0, 3.0, 2.0),
                    Steps::new(2.0, 6.0, 2.0),
                    GridOrder::ZOuter,
                    Footprint::square(Span::new(0.8, 1.2), Span::new(0.4, 0.8)),
                )
                .with_jitter(0.1)
                .keeping_clear(&building_one),
            ],
        },
        RegionSpec {
            name: "center-back",
            seed: 98765,
            batches: vec![
                Batch::grid(
                    Steps::new(-2.0, 2.0, 1.2),
                    Steps::new(0.0, 6.0, 1.2),
                    GridOrder::ZOuter,
                    standard,
                )
                .with_jitter(0.1),
            ],
        },
        RegionSpec {
            name: "between-building-one-and-center",
            seed: 11111,
            batches: vec![
                Batch::grid(
                    Steps::new(-7.0, 4.0, 1.0),
                    Steps::new(0.5, 7.5, 1.0),
                    GridOrder::ZOuter,
                    standard,
                )
                .with_parts(PartCount::Fixed(1))
                .keeping_clear(&building_one_near)
                .with_thinning(Thinning {
                    area: Rect::new(vec2(0.0, 5.8), vec2(8.0, 7.2)),
                    keep_below: 0.3,
                }),
            ],
        },
        RegionSpec {
            name: "left-of-center",
            seed: 22222,
            batches: vec![
                Batch::grid(
                    Steps::new(-6.0, -1.0, 1.0),
                    Steps::new(-2.0, 2.0, 1.0),
                    GridOrder::ZOuter,
                    standard,
                )
                .with_jitter(0.1),
            ],
        },
        RegionSpec {
            name: "left-between-building-one-and-center",
            seed: 33333,
            batches: vec![
                Batch::grid(
                    Steps::new(-6.0, -1.0, 1.0),
                    Steps::new(4.0, 7.0, 1.0),
                    GridOrder::ZOuter,
                    standard,
                )
                .with_jitter(0.1),
            ],
        },
        RegionSpec {
            name: "between-water-and-center",
            seed: 44444,
            batches: vec![
                Batch::grid(
                    Steps::new(-7.0, -1.0, 1.0),
                    Steps::new(-3.0, 3.0, 1.0),
                    GridOrder::XOuter,
                    standard,
                )
                .with_jitter(0.1),
            ],
        },
        RegionSpec {
            name: "front-of-building-one",
            seed: 55555,
            batches: vec![
                Batch::points(
                    vec![vec2(6.0, 9.8)],
                    Footprint::square(Span::new(0.3, 0.4), Span::new(0.2, 0.4)),
                )
                .with_jitter(0.2),
                Batch::points(
                    vec![vec2(8.5, 10.2)],
                    Footprint::square(Span::new(0.5, 0.7), Span::new(0.3, 0.6)),
                )
                .with_jitter(0.2),
                Batch::grid(
                    Steps::new(5.0, 10.0, 1.8),
                    Steps::new(9.5, 11.0, 1.8),
                    GridOrder::ZOuter,
                    Footprint::square(Span::new(0.4, 0.6), Span::new(0.25, 0.5)),
                )
                .with_jitter(0.1)
                .keeping_clear(&building_one_near),
            ],
        },
        RegionSpec {
            name: "left-of-building-one",
            seed: 66666,
            batches: vec![
                Batch::grid(
                    Steps::new(-6.0, -1.0, 1.5),
                    Steps::new(6.0, 10.0, 1.5),
                    GridOrder::ZOuter,
                    standard,
                )
                .with_jitter(0.1)
                .keeping_clear(&building_one),
            ],
        },
        RegionSpec {
            name: "marker",
            seed: 77777,
            batches: vec![
                Batch::grid(
                    Steps::new(-3.5, -1.5, 2.5),
                    Steps::new(0.0, 4.0, 2.5),
                    GridOrder::ZOuter,
                    Footprint::square(Span::new(0.7, 1.0), Span::new(0.2, 0.4)),
                )
                .with_jitter(0.3)
                .keeping_clear(&building_one),
            ],
        },
        RegionSpec {
            name: "before-logo",
            seed: 99999,
            batches: vec![
                Batch::grid(
                    Steps::new(-5.0, 5.0, 0.8),
                    Steps::new(6.3, 6.9, 0.4),
                    GridOrder::ZOuter,
                    compact,
                )
                .with_jitter(0.1),
                Batch::grid(
                    Steps::new(-5.0, 5.0, 0.9),
                    Steps::new(7.2, 8.5, 0.5),
                    GridOrder::ZOuter,
                    compact,
                )
                .with_jitter(0.1),
                Batch::grid(
                    Steps::new(-5.0, 5.0, 0.8),
                    Steps::new(3.5, 5.5, 0.4),
                    GridOrder::ZOuter,
                    compact,
                )
                .with_jitter(0.1),
            ],
        },
        RegionSpec {
            name: "small-right",
            seed: 88888,
            batches: vec![
                Batch::points(
                    vec![vec2(0.5, 1.5), vec2(0.0, 2.5)],
                    Footprint::square(Span::new(0.7, 0.8), Span::new(0.3, 0.5)),
                )
                .with_parts(PartCount::Fixed(2))
                .keeping_clear(&building_one),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneConfig;

    fn zones() -> Vec<ExclusionZone> {
        SceneConfig::default().exclusion_zones()
    }

    fn assert_clear_of_zones(layout: &[PlacedStructure], rules: &LayoutRules, zones: &[ExclusionZone]) {
        for placed in layout {
            let margin = rules.margin_at(placed.origin);
            for zone in zones {
                let distance = zone.center.distance(placed.origin);
                assert!(
                    distance >= zone.radius + placed.radius + margin,
                    "structure at {:?} (r={}) overlaps zone {:?}",
                    placed.origin,
                    placed.radius,
                    zone
                );
            }
            assert!(!rules.water.contains(placed.origin));
        }
    }

    #[test]
    fn steps_include_inclusive_end() {
        assert_eq!(Steps::new(-3.0, 3.0, 2.0).values(), vec![-3.0, -1.0, 1.0, 3.0]);
        assert_eq!(Steps::new(0.0, 6.0, 1.2).values().len(), 6);
        assert_eq!(Steps::new(9.5, 11.0, 1.8).values(), vec![9.5]);
    }

    #[test]
    fn generate_is_deterministic() {
        let zones = zones();
        let first = generate(CITY_GRID_SEED, &zones);
        let second = generate(CITY_GRID_SEED, &zones);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_diverge() {
        let zones = zones();
        assert_ne!(generate(1, &zones), generate(2, &zones));
    }

    #[test]
    fn placements_avoid_every_zone_for_many_seeds() {
        let zones = zones();
        let rules = LayoutRules::default();
        let mut seeds = fastrand::Rng::with_seed(7);
        for _ in 0..64 {
            let seed = seeds.u32(0..233_280);
            assert_clear_of_zones(&generate(seed, &zones), &rules, &zones);
        }
    }

    #[test]
    fn city_layout_is_reproducible_and_clear() {
        let zones = zones();
        let rules = LayoutRules::default();
        let city = generate_city(&rules, &zones);
        assert_eq!(city, generate_city(&rules, &zones));
        assert_clear_of_zones(&city, &rules, &zones);
        for placed in &city {
            assert!(rules.within_map(placed.origin));
        }
    }

    #[test]
    fn regions_are_independent_sequences() {
        let zones = zones();
        let rules = LayoutRules::default();
        let regions = city_regions(&rules.keep_clear);
        let marker = regions.iter().find(|r| r.name == "marker").unwrap();
        let alone = generate_region(marker, &rules, &zones);
        let city = generate_city(&rules, &zones);
        // Generating the other regions first must not shift this region's output.
        assert!(alone.iter().all(|placed| city.contains(placed)));
    }

    #[test]
    fn parts_stay_within_bounds() {
        let zones = zones();
        let city = generate_city(&LayoutRules::default(), &zones);
        for placed in &city {
            assert!((1..=3).contains(&placed.parts.len()));
            for part in &placed.parts {
                assert!(part.width > 0.0 && part.depth > 0.0 && part.height > 0.0);
                assert!(part.offset.x.abs() <= placed.radius);
                assert!(part.offset.y.abs() <= placed.radius);
            }
        }
    }

    #[test]
    fn keep_clear_circles_are_respected() {
        let zones = Vec::new();
        let rules = LayoutRules::default();
        let city = generate_city(&rules, &zones);
        for placed in &city {
            assert!(!rules.keep_clear.blocks(placed.origin));
            assert!(placed.origin.distance(rules.keep_clear.logo) >= LOGO_CLEARANCE_RADIUS);
        }
    }

    #[test]
    fn moved_spawn_is_kept_clear_in_every_region() {
        let zones = zones();
        let spawn = vec2(3.0, -12.0);
        let near_spawn = |city: &[PlacedStructure]| {
            city.iter()
                .filter(|placed| placed.origin.distance(spawn) < SPAWN_CLEARANCE_RADIUS)
                .count()
        };

        let default_city = generate_city(&LayoutRules::default(), &zones);
        assert!(near_spawn(&default_city) > 0);

        let keep_clear = KeepClear {
            spawn,
            ..KeepClear::default()
        };
        let rules = LayoutRules::for_scene(LayoutRules::default().water, keep_clear);
        assert_eq!(near_spawn(&generate_city(&rules, &zones)), 0);
    }

    #[test]
    fn missing_building_one_drops_its_clearance_only() {
        let keep_clear = KeepClear {
            building_one: None,
            ..KeepClear::default()
        };
        assert!(keep_clear.around_building_one(3.0).is_empty());
        assert_eq!(KeepClear::default().around_building_one(3.0).len(), 1);
        assert!(keep_clear.blocks(keep_clear.logo));
    }

    #[test]
    fn empty_zone_list_places_more() {
        let with_zones = generate(CITY_GRID_SEED, &zones());
        let without = generate(CITY_GRID_SEED, &[]);
        assert!(without.len() > with_zones.len());
    }

    #[test]
    fn water_blocks_placement() {
        let rules = LayoutRules::default();
        assert!(!rules.is_free(vec2(-8.0, 0.0), 0.1, &[]));
        assert!(rules.is_free(vec2(4.0, -6.0), 0.5, &[]));
    }

    #[test]
    fn relaxed_margin_applies_in_front_of_building_one() {
        let rules = LayoutRules::default();
        assert_eq!(rules.margin_at(vec2(8.0, 10.0)), RELAXED_MARGIN);
        assert_eq!(rules.margin_at(vec2(8.0, 8.0)), DEFAULT_MARGIN);
        assert_eq!(rules.margin_at(vec2(-2.0, 10.0)), DEFAULT_MARGIN);
    }
}
