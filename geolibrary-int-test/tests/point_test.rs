//! Point behaviour: validity, equality, cloning and the point algebra.

use geolibrary::{Geometry, GeometryError, GeometryKind, LineString, MultiPoint, Point};
use geolibrary_int_test::test_util::multi_point_geometry;

#[ctor::ctor]
fn init() {
    colog::init();
}

#[test]
fn test_uninitialized_point_is_invalid() {
    assert!(!Point::empty().is_valid());
    assert!(!Point::default().is_valid());
}

#[test]
fn test_out_of_range_points_are_invalid() {
    for (longitude, latitude) in [(-180.1, 90.0), (180.0001, -70.0), (-170.0, 100.0), (120.0, -91.0)] {
        let point = Point::new(longitude, latitude);
        assert!(
            !point.is_valid(),
            "expected ({}, {}) to be invalid",
            longitude,
            latitude
        );
    }
}

#[test]
fn test_in_range_points_are_valid() {
    for (longitude, latitude) in [(-170.1, 90.0), (180.000000001, -70.0), (120.0, -90.000000001)] {
        let point = Point::new(longitude, latitude);
        assert!(
            point.is_valid(),
            "expected ({}, {}) to be valid",
            longitude,
            latitude
        );
    }
}

#[test]
fn test_point_not_equal_to_other_variant() {
    let point = Geometry::empty_point();
    let other = Geometry::from(MultiPoint::default());
    assert_ne!(point, other);
}

#[test]
fn test_valid_point_not_equal_to_invalid_point() {
    assert_ne!(Point::new(100.0, 50.0), Point::empty());
    assert_ne!(Point::empty(), Point::new(100.0, 50.0));
}

#[test]
fn test_points_with_different_coordinates_not_equal() {
    assert_ne!(Point::new(100.0, 50.0), Point::new(100.0, 60.0));
}

#[test]
fn test_points_with_same_coordinates_equal() {
    let point = Point::new(100.0, 50.0);
    let other = Point::new(100.0, 50.0);
    assert!(point.eq(&other));
    assert!(point == other);
}

#[test]
fn test_point_equals_itself() {
    let point = Point::new(100.0, 50.0);
    assert_eq!(point, point);
}

#[test]
fn test_points_with_very_close_coordinates_equal() {
    let point = Point::new(100.000000003, 50.0);
    let other = Point::new(100.0, 50.000000003);
    assert!(point.eq(&other));
    assert!(point == other);
}

#[test]
fn test_absent_points_compare_symmetrically() {
    let none: Option<Point> = None;
    assert!(none == None);
    assert!(Some(Point::empty()) != none);
    assert!(none != Some(Point::empty()));
    assert!(Some(Point::new(1.0, 2.0)) != none);
}

#[test]
fn test_clone_of_invalid_point_is_invalid_point() {
    let point = Geometry::empty_point();
    let copied = point.clone();
    assert!(!copied.is_valid());
    assert_eq!(copied.kind(), GeometryKind::Point);
    assert!(copied.as_point().is_some());
}

#[test]
fn test_clone_of_valid_point_is_equal() {
    let point = Point::new(100.0, 50.0);
    assert_eq!(point.clone(), point);
}

#[test]
fn test_union_of_same_points_is_copy() {
    let point = Geometry::point(100.0, 50.0);
    let union = point.union(&Geometry::point(100.0, 50.0)).unwrap();

    assert!(union.is_valid());
    assert_eq!(union, point);

    drop(point);
    assert!(union.is_valid());
    assert_eq!(union, Geometry::point(100.0, 50.0));
}

#[test]
fn test_union_of_different_points_is_multipoint() {
    let point1 = Geometry::point(100.0, 50.0);
    let point2 = Geometry::point(120.0, 60.0);

    let union = point1.union(&point2).unwrap();
    let union2 = point2.union(&point1).unwrap();

    assert_eq!(union.kind(), GeometryKind::MultiPoint);
    assert_eq!(union2.kind(), GeometryKind::MultiPoint);
    assert_eq!(union.as_multi_point().map(MultiPoint::len), Some(2));
    assert_eq!(union2.as_multi_point().map(MultiPoint::len), Some(2));
}

#[test]
fn test_union_with_invalid_point_is_copy_of_valid_one() {
    let point1 = Geometry::point(100.0, 50.0);
    let point2 = Geometry::empty_point();

    let union = point1.union(&point2).unwrap();
    let union2 = point2.union(&point1).unwrap();

    assert_eq!(union.kind(), GeometryKind::Point);
    assert_eq!(union2, union);
    assert_eq!(union, point1);
}

#[test]
fn test_union_of_point_and_multipoint_is_multipoint() {
    let point = Geometry::point(100.0, 50.0);
    let multi_point = multi_point_geometry(&[(100.0, 50.0), (120.0, -70.0)]);

    let union = point.union(&multi_point).unwrap();
    let union2 = multi_point.union(&point).unwrap();

    assert_eq!(union.kind(), GeometryKind::MultiPoint);
    assert_eq!(union2, union);
    assert_eq!(union, multi_point);
}

#[test]
fn test_union_of_point_and_linestring_not_supported() {
    let point = Geometry::empty_point();
    let line_string = Geometry::from(LineString::default());

    let err = point.union(&line_string).unwrap_err();
    assert_eq!(err.to_string(), "Not supported type!");
    assert!(matches!(err, GeometryError::UnsupportedCombination { .. }));
}

#[test]
fn test_invalid_points_do_not_intersect() {
    let point = Geometry::empty_point();
    let point2 = Geometry::empty_point();

    assert!(!point.is_intersects(&point2).unwrap());
    assert_eq!(point.intersection(&point2).unwrap(), None);
}

#[test]
fn test_invalid_point_does_not_intersect_valid_point() {
    let point1 = Geometry::point(100.0, 50.0);
    let point2 = Geometry::empty_point();

    assert!(!point1.is_intersects(&point2).unwrap());
    assert_eq!(point1.intersection(&point2).unwrap(), None);
}

#[test]
fn test_different_points_do_not_intersect() {
    let point1 = Geometry::point(100.0, 50.0);
    let point2 = Geometry::point(120.0, 60.0);

    assert!(!point1.is_intersects(&point2).unwrap());
    assert_eq!(point1.intersection(&point2).unwrap(), None);
}

#[test]
fn test_same_points_intersect() {
    let point1 = Geometry::point(100.0, 50.0);
    let point2 = Geometry::point(100.0, 50.0);

    assert!(point1.is_intersects(&point2).unwrap());

    let result = point1.intersection(&point2).unwrap();
    assert!(result.is_some());
    assert_eq!(result, Some(point1));
}

#[test]
fn test_valid_point_does_not_intersect_empty_multipoint() {
    let point1 = Geometry::point(100.0, 50.0);
    let multi_point = Geometry::from(MultiPoint::default());

    assert!(!point1.is_intersects(&multi_point).unwrap());
    assert_eq!(point1.intersection(&multi_point).unwrap(), None);
}

#[test]
fn test_invalid_point_does_not_intersect_valid_multipoint() {
    let point1 = Geometry::empty_point();
    let multi_point = multi_point_geometry(&[(100.0, 50.0), (120.0, -70.0)]);

    assert!(!point1.is_intersects(&multi_point).unwrap());
    assert_eq!(point1.intersection(&multi_point).unwrap(), None);
}
