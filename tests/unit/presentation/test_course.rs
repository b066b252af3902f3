use edu_client::presentation::{Course, CourseReview, PlatformStats};
use serde_json::json;

#[test]
fn test_course_deserializes_catalogue_card() {
    let course: Course = serde_json::from_value(json!({
        "id": 12,
        "title": "Python с нуля",
        "description": "Основы программирования",
        "category": "Программирование",
        "image": "/img/python.png",
        "duration": "3 месяца",
        "students": 1520,
        "price": 9900,
        "oldPrice": 14900,
        "level": "beginner"
    }))
    .unwrap();

    assert_eq!(course.id, json!(12));
    assert_eq!(course.students, Some(1520));
    assert_eq!(course.old_price, Some(14900.0));
    assert_eq!(course.extra.get("level"), Some(&json!("beginner")));
    assert!(course.is_discounted());
    assert_eq!(course.discount_percent(), Some(34));
}

#[test]
fn test_course_without_old_price_is_not_discounted() {
    let course: Course = serde_json::from_value(json!({
        "id": "js",
        "title": "JavaScript",
        "description": "",
        "price": 4900
    }))
    .unwrap();

    assert!(!course.is_discounted());
    assert_eq!(course.discount_percent(), None);
}

#[test]
fn test_course_review_defaults() {
    let review: CourseReview =
        serde_json::from_value(json!({ "rating": 4, "comment": "Хорошо" })).unwrap();
    assert_eq!(review.rating, 4.0);
    assert!(review.author.is_none());
    assert!(review.id.is_null());
}

#[test]
fn test_platform_stats() {
    let stats: PlatformStats =
        serde_json::from_value(json!({ "students": 50000, "courses": 200, "satisfaction": 98 }))
            .unwrap();
    assert_eq!(
        stats,
        PlatformStats {
            students: 50000,
            courses: 200,
            satisfaction: 98.0
        }
    );
}

#[test]
fn test_fractional_rating_and_satisfaction_are_accepted() {
    let review: CourseReview =
        serde_json::from_value(json!({ "rating": 4.5, "comment": "Неплохо" })).unwrap();
    assert_eq!(review.rating, 4.5);

    let stats: PlatformStats =
        serde_json::from_value(json!({ "students": 10, "courses": 2, "satisfaction": 98.5 }))
            .unwrap();
    assert_eq!(stats.satisfaction, 98.5);
}

#[test]
fn test_negative_price_has_no_discount_percent() {
    let course: Course = serde_json::from_value(json!({
        "id": 3,
        "title": "Ошибка в данных",
        "description": "",
        "price": -500,
        "oldPrice": 1000
    }))
    .unwrap();

    assert_eq!(course.discount_percent(), None);
}

#[test]
fn test_free_course_is_full_discount() {
    let course: Course = serde_json::from_value(json!({
        "id": 4,
        "title": "Бесплатно",
        "description": "",
        "price": 0,
        "oldPrice": 1000
    }))
    .unwrap();

    assert_eq!(course.discount_percent(), Some(100));
}
