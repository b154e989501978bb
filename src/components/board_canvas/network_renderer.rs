use crate::geometry::{offset_segment, star_vertices_default};
use crate::models::{Color, GameSnapshot, StationId, StationNetwork};
use web_sys::CanvasRenderingContext2d;

const CONNECTION_COLOR: Color = Color::from_rgb(0xff_ff_00);
const CONNECTION_ALPHA: f64 = 0.4;
const CONNECTION_WIDTH: f64 = 4.0;
const STATION_COLOR: Color = Color::from_rgb(0x4a_32_67);
const STATION_ALPHA: f64 = 0.5;
const STATION_STROKE_WIDTH: f64 = 2.0;
const LABEL_COLOR: &str = "#000000";
const LABEL_FONT: &str = "12px sans-serif";
const LABEL_OFFSET: (f64, f64) = (20.0, -10.0);

/// A connection line, already pulled back from both station centers
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionSegment {
    pub from: StationId,
    pub to: StationId,
    pub start: (f64, f64),
    pub end: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationMarker {
    pub station: StationId,
    pub position: (f64, f64),
    pub name: String,
    pub vertices: Vec<(f64, f64)>,
}

/// One segment per network edge, in authoring order
#[must_use]
pub fn layout_connections(
    snapshot: &GameSnapshot,
    network: &StationNetwork,
    clearance: f64,
) -> Vec<ConnectionSegment> {
    network
        .connections()
        .filter_map(|(from, to)| {
            let a = snapshot.station(from)?.position();
            let b = snapshot.station(to)?.position();
            let (start, end) = offset_segment(a, b, clearance);
            Some(ConnectionSegment { from, to, start, end })
        })
        .collect()
}

#[must_use]
pub fn layout_stations(snapshot: &GameSnapshot, radius: f64) -> Vec<StationMarker> {
    snapshot
        .stations()
        .iter()
        .map(|station| StationMarker {
            station: station.id,
            position: station.position(),
            name: station.name.clone(),
            vertices: star_vertices_default(station.position(), radius),
        })
        .collect()
}

pub fn draw_connections(ctx: &CanvasRenderingContext2d, segments: &[ConnectionSegment]) {
    ctx.set_stroke_style_str(&CONNECTION_COLOR.to_css(CONNECTION_ALPHA));
    ctx.set_line_width(CONNECTION_WIDTH);

    for segment in segments {
        ctx.begin_path();
        ctx.move_to(segment.start.0, segment.start.1);
        ctx.line_to(segment.end.0, segment.end.1);
        ctx.stroke();
    }
}

pub fn draw_stations(ctx: &CanvasRenderingContext2d, markers: &[StationMarker], show_labels: bool) {
    let style = STATION_COLOR.to_css(STATION_ALPHA);
    ctx.set_fill_style_str(&style);
    ctx.set_stroke_style_str(&style);
    ctx.set_line_width(STATION_STROKE_WIDTH);

    for marker in markers {
        let Some((first, rest)) = marker.vertices.split_first() else { continue };

        ctx.begin_path();
        ctx.move_to(first.0, first.1);
        for vertex in rest {
            ctx.line_to(vertex.0, vertex.1);
        }
        ctx.close_path();
        ctx.fill();
        ctx.stroke();
    }

    if show_labels {
        draw_station_labels(ctx, markers);
    }
}

fn draw_station_labels(ctx: &CanvasRenderingContext2d, markers: &[StationMarker]) {
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");

    for marker in markers {
        let _ = ctx.fill_text(
            &marker.name,
            marker.position.0 + LABEL_OFFSET.0,
            marker.position.1 + LABEL_OFFSET.1,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_default_board;
    use crate::geometry::distance;

    #[test]
    fn test_default_board_connections() {
        let (snapshot, _) = load_default_board().expect("embedded board is valid");
        let (network, issues) = StationNetwork::build(&snapshot);
        let segments = layout_connections(&snapshot, &network, 15.0);

        assert!(issues.is_empty());
        // 1-2, 2-4, 4-5, 4-6, 6-7, 7-8, 8-9, 9-10 listed from both ends
        assert_eq!(segments.len(), 16);
        let count_1_2 = segments
            .iter()
            .filter(|s| (s.from, s.to) == (StationId(1), StationId(2)) || (s.from, s.to) == (StationId(2), StationId(1)))
            .count();
        assert_eq!(count_1_2, 2);
    }

    #[test]
    fn test_segments_stop_short_of_stations() {
        let (snapshot, _) = load_default_board().expect("embedded board is valid");
        let (network, _) = StationNetwork::build(&snapshot);

        for segment in layout_connections(&snapshot, &network, 15.0) {
            let a = snapshot.station(segment.from).expect("from").position();
            let b = snapshot.station(segment.to).expect("to").position();
            assert!((distance(a, segment.start) - 15.0).abs() < 1e-9);
            assert!((distance(b, segment.end) - 15.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_station_markers() {
        let (snapshot, _) = load_default_board().expect("embedded board is valid");
        let markers = layout_stations(&snapshot, 15.0);

        assert_eq!(markers.len(), 10);
        assert!(markers.iter().all(|m| m.vertices.len() == 10));
        assert_eq!(markers[0].vertices[0], (446.5, 80.5 - 15.0));
    }
}
