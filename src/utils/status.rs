use crate::models::feature::PolygonFeature;
use crate::models::lnglat::LngLat;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

fn corner_cell(point: &LngLat) -> Cell {
    Cell::new(format!("{:.6}, {:.6}", point.lng(), point.lat())).set_alignment(CellAlignment::Right)
}

/// Corner table plus warnings for boxes whose corners look swapped.
pub fn feature_summary(features: &[PolygonFeature]) -> (Table, Vec<String>) {
    let mut table = Table::new();
    table
        .set_header(
            ["", "#", "SW", "NW", "NE", "SE"]
                .into_iter()
                .map(|h| {
                    Cell::new(h)
                        .add_attribute(Attribute::Bold)
                        .set_alignment(CellAlignment::Center)
                })
                .collect::<Vec<_>>(),
        )
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    let mut warnings = Vec::new();
    for (idx, feature) in features.iter().enumerate() {
        let [sw, nw, ne, se, _] = feature.ring();
        let mut status = "✅";

        // Rings are built as given, so these come out inverted or wrap the dateline
        if sw.lng() > ne.lng() {
            warnings.push(format!(
                "  ⚠️#{}: sw longitude {:.6} is east of ne longitude {:.6}",
                idx,
                sw.lng(),
                ne.lng()
            ));
            status = "⚠️";
        }
        if sw.lat() > ne.lat() {
            warnings.push(format!(
                "  ⚠️#{}: sw latitude {:.6} is north of ne latitude {:.6}",
                idx,
                sw.lat(),
                ne.lat()
            ));
            status = "⚠️";
        }

        table.add_row(vec![
            Cell::new(status).set_alignment(CellAlignment::Center),
            Cell::new(idx).set_alignment(CellAlignment::Center),
            corner_cell(sw),
            corner_cell(nw),
            corner_cell(ne),
            corner_cell(se),
        ]);
    }

    (table, warnings)
}

/// Print the summary to stderr so stdout stays GeoJSON.
pub fn print_feature_summary(features: &[PolygonFeature]) {
    let (table, warnings) = feature_summary(features);
    eprintln!("\nBounding box summary:\n{}", table);

    if !warnings.is_empty() {
        eprintln!("\nWarnings:");
        for warning in warnings {
            eprintln!("{}", warning);
        }
    }

    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::envelope::ring;

    #[test]
    fn test_one_row_per_feature() {
        let features = vec![
            PolygonFeature::new(ring(LngLat(10.0, 20.0), LngLat(30.0, 40.0))),
            PolygonFeature::new(ring(LngLat(-1.0, -1.0), LngLat(1.0, 1.0))),
        ];
        let (table, warnings) = feature_summary(&features);
        assert_eq!(table.row_iter().count(), 2);
        assert!(warnings.is_empty());

        let rendered = table.to_string();
        assert!(rendered.contains("10.000000, 40.000000"));
    }

    #[test]
    fn test_inverted_corners_warn() {
        // Crosses the dateline: sw is east of ne.
        let features = vec![PolygonFeature::new(ring(
            LngLat(170.0, 50.0),
            LngLat(-170.0, 40.0),
        ))];
        let (_, warnings) = feature_summary(&features);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("longitude"));
        assert!(warnings[1].contains("latitude"));
    }
}
