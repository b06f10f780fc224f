use dodona_types::{MapDistrict, Point, RegionId};

/// Even-odd ray casting; points on an edge may land on either side.
pub fn contains(outline: &[Point], point: Point) -> bool {
    if outline.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = outline.len() - 1;
    for i in 0..outline.len() {
        let (a, b) = (outline[i], outline[j]);
        if (a.y > point.y) != (b.y > point.y) {
            let crossing_x = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// The district under a point of the map, if any.
pub fn district_at(districts: &[MapDistrict], point: Point) -> Option<RegionId> {
    districts
        .iter()
        .find(|d| contains(&d.outline, point))
        .map(|d| d.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dodona_core::dataset;

    #[test]
    fn test_labels_fall_inside_their_district() {
        let data = dataset();
        for district in &data.districts {
            assert_eq!(
                district_at(&data.districts, district.label_at),
                Some(district.id),
                "label of {} not inside its outline",
                district.id
            );
        }
    }

    #[test]
    fn test_outside_the_map() {
        let data = dataset();
        assert_eq!(district_at(&data.districts, Point::new(12.0, 8.0)), None);
        assert_eq!(district_at(&data.districts, Point::new(320.0, 220.0)), None);
    }

    #[test]
    fn test_degenerate_outline() {
        let line = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        assert!(!contains(&line, Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_square() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert!(contains(&square, Point::new(5.0, 5.0)));
        assert!(!contains(&square, Point::new(15.0, 5.0)));
    }
}
