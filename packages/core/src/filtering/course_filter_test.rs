//! Tests for the course filter engine

#[cfg(test)]
mod tests {
    use crate::filtering::{filter_courses, CourseTypeFilter};
    use crate::models::{CourseSummary, CourseType};

    fn course(
        id: &str,
        title: &str,
        description: &str,
        subject: &str,
        year: i64,
        course_type: Option<CourseType>,
    ) -> CourseSummary {
        CourseSummary {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            subject: subject.to_string(),
            year_of_study: year,
            course_type,
            created_at: None,
            updated_at: None,
            extra: serde_json::Map::new(),
        }
    }

    /// The catalog from the original filter tests: math (mandatory),
    /// python (elective), history (mandatory), and one untyped course.
    fn catalog() -> Vec<CourseSummary> {
        vec![
            course(
                "1",
                "Matematyka podstawowa",
                "Podstawy matematyki",
                "Matematyka",
                1,
                Some(CourseType::Mandatory),
            ),
            course(
                "2",
                "Programowanie Python",
                "Nauka programowania w Pythonie",
                "Informatyka",
                2,
                Some(CourseType::Elective),
            ),
            course(
                "3",
                "Historia Polski",
                "Historia Polski od średniowiecza",
                "Historia",
                1,
                Some(CourseType::Mandatory),
            ),
            course("4", "Kurs bez typu", "Kurs bez ustawionego typu", "Test", 1, None),
        ]
    }

    fn ids(courses: &[CourseSummary]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_identity_filter_returns_everything_in_order() {
        let all = catalog();
        let visible = filter_courses(&all, "", CourseTypeFilter::All);
        assert_eq!(ids(&visible), ids(&all));
    }

    #[test]
    fn test_whitespace_search_is_identity() {
        let all = catalog();
        let visible = filter_courses(&all, "   ", CourseTypeFilter::All);
        assert_eq!(ids(&visible), ids(&all));
    }

    #[test]
    fn test_search_results_are_subset_of_input() {
        let all = catalog();
        for query in ["a", "python", "historia", "zzz", "1"] {
            let visible = filter_courses(&all, query, CourseTypeFilter::All);
            assert!(visible.iter().all(|c| all.contains(c)), "query {query:?}");
        }
    }

    #[test]
    fn test_elective_filter() {
        let visible = filter_courses(&catalog(), "", CourseTypeFilter::Elective);
        assert_eq!(ids(&visible), ["2"]);
    }

    #[test]
    fn test_elective_filter_with_search() {
        let visible = filter_courses(&catalog(), "python", CourseTypeFilter::Elective);
        assert_eq!(ids(&visible), ["2"]);
    }

    #[test]
    fn test_mandatory_filter_with_search() {
        let visible = filter_courses(&catalog(), "matematyka", CourseTypeFilter::Mandatory);
        assert_eq!(ids(&visible), ["1"]);
    }

    #[test]
    fn test_untyped_course_counts_as_mandatory() {
        let mandatory = filter_courses(&catalog(), "", CourseTypeFilter::Mandatory);
        assert!(ids(&mandatory).contains(&"4"));

        let elective = filter_courses(&catalog(), "", CourseTypeFilter::Elective);
        assert!(!ids(&elective).contains(&"4"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let all = catalog();
        let upper = filter_courses(&all, "PYTHON", CourseTypeFilter::All);
        let lower = filter_courses(&all, "python", CourseTypeFilter::All);
        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(ids(&upper), ["2"]);
    }

    #[test]
    fn test_search_is_accent_sensitive() {
        // No locale folding: "sredniowiecza" does not match "średniowiecza"
        let visible = filter_courses(&catalog(), "sredniowiecza", CourseTypeFilter::All);
        assert!(visible.is_empty());
        let visible = filter_courses(&catalog(), "średniowiecza", CourseTypeFilter::All);
        assert_eq!(ids(&visible), ["3"]);
    }

    #[test]
    fn test_search_matches_subject_and_year() {
        let by_subject = filter_courses(&catalog(), "informatyka", CourseTypeFilter::All);
        assert_eq!(ids(&by_subject), ["2"]);

        let by_year = filter_courses(&catalog(), "2", CourseTypeFilter::All);
        assert_eq!(ids(&by_year), ["2"]);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let visible = filter_courses(&catalog(), "", CourseTypeFilter::Mandatory);
        assert_eq!(ids(&visible), ["1", "3", "4"]);
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert!(filter_courses(&[], "python", CourseTypeFilter::All).is_empty());
    }

    #[test]
    fn test_parse_accepts_polish_and_english_values() {
        assert_eq!(CourseTypeFilter::parse("wszystkie"), CourseTypeFilter::All);
        assert_eq!(CourseTypeFilter::parse("all"), CourseTypeFilter::All);
        assert_eq!(
            CourseTypeFilter::parse("obowiązkowy"),
            CourseTypeFilter::Mandatory
        );
        assert_eq!(
            CourseTypeFilter::parse("fakultatywny"),
            CourseTypeFilter::Elective
        );
        assert_eq!(CourseTypeFilter::parse("elective"), CourseTypeFilter::Elective);
    }

    #[test]
    fn test_parse_fails_open_on_unknown_values() {
        assert_eq!(CourseTypeFilter::parse("przestarzały"), CourseTypeFilter::All);
        assert_eq!(CourseTypeFilter::parse(""), CourseTypeFilter::All);
    }

    #[test]
    fn test_malformed_record_never_breaks_the_pass() {
        // A record with every display field empty fails searches, passes identity
        let mut all = catalog();
        all.push(course("5", "", "", "", 0, None));

        let visible = filter_courses(&all, "python", CourseTypeFilter::All);
        assert_eq!(ids(&visible), ["2"]);

        let identity = filter_courses(&all, "", CourseTypeFilter::All);
        assert_eq!(identity.len(), 5);
    }
}
