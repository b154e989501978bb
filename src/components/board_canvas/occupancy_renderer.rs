use crate::error::SceneError;
use crate::models::{Color, ColorMap, GameSnapshot, LocomotiveId, OwnershipIndex, PlayerId, Station, StationId};
use indexmap::IndexMap;
use web_sys::CanvasRenderingContext2d;

const BAR_WIDTH: f64 = 20.0;
const BAR_SPACING: f64 = 20.0;
const BAR_HEIGHT_PER_WAGON: f64 = 5.0;
const MAX_BAR_HEIGHT: f64 = 100.0;
const BAR_BASELINE_OFFSET: f64 = 30.0; // Bars grow upward from this far above the station
const BAR_LABEL_FONT: &str = "12px Arial";
const BAR_LABEL_COLOR: &str = "#FFFFFF";

const TOKEN_WIDTH: f64 = 20.0;
const TOKEN_HEIGHT: f64 = 10.0;
const TOKEN_ID_STEP: f64 = 10.0;
const TOKEN_X_OFFSET: f64 = -20.0;
const TOKEN_Y_OFFSET: f64 = 10.0;
const TOKEN_LABEL_Y_OFFSET: f64 = 20.0;
const TOKEN_LABEL_FONT: &str = "10px sans-serif";
const TOKEN_LABEL_COLOR: &str = "#FFFFFF";

/// One player's wagon count at a station
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub player: PlayerId,
    pub count: u32,
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

impl Bar {
    #[must_use]
    pub fn label_position(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub station: StationId,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocomotiveToken {
    pub locomotive: LocomotiveId,
    pub station: StationId,
    pub owner: PlayerId,
    pub center: (f64, f64),
    pub color: Color,
    pub label: String,
    pub label_position: (f64, f64),
}

/// Count a station's wagons per owner, in order of first appearance
///
/// Wagons nobody owns are left out of the tally and reported in `issues`.
pub fn tally_wagons(
    snapshot: &GameSnapshot,
    index: &OwnershipIndex,
    station: StationId,
    issues: &mut Vec<SceneError>,
) -> IndexMap<PlayerId, u32> {
    let mut counts = IndexMap::new();
    let Some(occupancy) = snapshot.occupancy_at(station) else { return counts };

    for &wagon in &occupancy.wagons {
        match index.wagon_owner(wagon) {
            Some(owner) => *counts.entry(owner).or_insert(0) += 1,
            None => issues.push(SceneError::UnassignedWagon { station, wagon }),
        }
    }

    counts
}

/// Bars centered as a group above the station
pub fn layout_bar_chart(
    snapshot: &GameSnapshot,
    index: &OwnershipIndex,
    colors: &ColorMap,
    station: &Station,
    issues: &mut Vec<SceneError>,
) -> BarChart {
    let counts = tally_wagons(snapshot, index, station.id, issues);
    let baseline = station.y - BAR_BASELINE_OFFSET;

    #[allow(clippy::cast_precision_loss)]
    let group_width = counts.len().saturating_sub(1) as f64 * BAR_SPACING;
    let mut x = station.x - group_width / 2.0;

    let mut bars = Vec::with_capacity(counts.len());
    for (player, count) in counts {
        let height = (f64::from(count) * BAR_HEIGHT_PER_WAGON).min(MAX_BAR_HEIGHT);
        bars.push(Bar {
            player,
            count,
            x,
            y: baseline - height,
            width: BAR_WIDTH,
            height,
            color: colors.color_or(player, Color::WHITE),
        });
        x += BAR_SPACING;
    }

    BarChart { station: station.id, bars }
}

/// Bar charts for every station, in station order
pub fn layout_bar_charts(
    snapshot: &GameSnapshot,
    index: &OwnershipIndex,
    colors: &ColorMap,
    issues: &mut Vec<SceneError>,
) -> Vec<BarChart> {
    snapshot
        .stations()
        .iter()
        .map(|station| layout_bar_chart(snapshot, index, colors, station, issues))
        .collect()
}

/// Locomotive tokens for the whole occupancy table
///
/// Stations are visited in ascending ID order whatever the authoring order
/// of the table, so tokens at higher-numbered stations draw on top. Rows for
/// unknown stations are skipped and reported in `issues`.
///
/// # Errors
///
/// Returns `UnassignedLocomotive` for the first locomotive without an owner.
/// No tokens are produced in that case.
pub fn layout_locomotives(
    snapshot: &GameSnapshot,
    index: &OwnershipIndex,
    colors: &ColorMap,
    issues: &mut Vec<SceneError>,
) -> Result<Vec<LocomotiveToken>, SceneError> {
    let mut rows: Vec<_> = snapshot.occupancy().iter().collect();
    rows.sort_unstable_by_key(|(id, _)| **id);

    let mut tokens = Vec::new();
    for (&station_id, occupancy) in rows {
        let Some(station) = snapshot.station(station_id) else {
            issues.push(SceneError::UnknownStation { station: station_id });
            continue;
        };

        for &locomotive in &occupancy.locomotives {
            let owner = index.locomotive_owner(locomotive).ok_or(SceneError::UnassignedLocomotive {
                station: station_id,
                locomotive,
            })?;

            // Tokens are spread by their raw ID, not packed
            let x = station.x + f64::from(locomotive.0) * TOKEN_ID_STEP + TOKEN_X_OFFSET;
            tokens.push(LocomotiveToken {
                locomotive,
                station: station_id,
                owner,
                center: (x, station.y + TOKEN_Y_OFFSET),
                color: colors.color_or(owner, Color::BLACK),
                label: format!("L{locomotive}"),
                label_position: (x, station.y + TOKEN_LABEL_Y_OFFSET),
            });
        }
    }

    Ok(tokens)
}

pub fn draw_bar_charts(ctx: &CanvasRenderingContext2d, charts: &[BarChart]) {
    for bar in charts.iter().flat_map(|chart| &chart.bars) {
        ctx.set_fill_style_str(&bar.color.to_css(1.0));
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);
    }

    ctx.set_fill_style_str(BAR_LABEL_COLOR);
    ctx.set_font(BAR_LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    for bar in charts.iter().flat_map(|chart| &chart.bars) {
        let (x, y) = bar.label_position();
        let _ = ctx.fill_text(&bar.count.to_string(), x, y);
    }
}

pub fn draw_locomotives(ctx: &CanvasRenderingContext2d, tokens: &[LocomotiveToken]) {
    for token in tokens {
        ctx.set_fill_style_str(&token.color.to_css(1.0));
        ctx.fill_rect(
            token.center.0 - TOKEN_WIDTH / 2.0,
            token.center.1 - TOKEN_HEIGHT / 2.0,
            TOKEN_WIDTH,
            TOKEN_HEIGHT,
        );
    }

    ctx.set_fill_style_str(TOKEN_LABEL_COLOR);
    ctx.set_font(TOKEN_LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    for token in tokens {
        let _ = ctx.fill_text(&token.label, token.label_position.0, token.label_position.1);
    }
}
