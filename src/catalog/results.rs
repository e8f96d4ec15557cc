use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub source: String,
    pub published: NaiveDate,
    pub summary: String,
    pub tags: Vec<String>,
    pub department: String,
    pub rating: f32,
    pub views: u32,
    /// Compact view count, e.g. "15.4K".
    pub views_label: String,
}

impl SearchResult {
    pub fn is_verified(&self) -> bool {
        self.has_tag("Verified")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Matches the full department name or its initials ("UGC").
    pub fn in_department(&self, department: &str) -> bool {
        self.department.eq_ignore_ascii_case(department)
            || initials(&self.department).eq_ignore_ascii_case(department)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Relevance,
    Newest,
    Oldest,
    TitleAsc,
    MostViewed,
}

/// Screen filters. `None` stands for "All Types" / "All Departments".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultFilter {
    pub document_type: Option<String>,
    pub department: Option<String>,
    pub sort: SortOrder,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub query: Option<String>,
    pub total: usize,
    pub results: Vec<SearchResult>,
}

/// Applies `filter` to the catalogue. Relevance keeps catalogue order.
pub fn search(query: Option<String>, filter: &ResultFilter) -> SearchResults {
    let document_type = non_blank(filter.document_type.as_deref());
    let department = non_blank(filter.department.as_deref());

    let mut results: Vec<SearchResult> = catalogue()
        .into_iter()
        .filter(|r| document_type.is_none_or(|t| r.has_tag(t)))
        .filter(|r| department.is_none_or(|d| r.in_department(d)))
        .collect();

    match filter.sort {
        SortOrder::Relevance => {}
        SortOrder::Newest => results.sort_by_key(|r| Reverse(r.published)),
        SortOrder::Oldest => results.sort_by_key(|r| r.published),
        SortOrder::TitleAsc => results.sort_by_key(|r| r.title.to_lowercase()),
        SortOrder::MostViewed => results.sort_by_key(|r| Reverse(r.views)),
    }

    SearchResults {
        query,
        total: results.len(),
        results,
    }
}

pub fn catalogue() -> Vec<SearchResult> {
    vec![
        entry(
            "National Education Policy (NEP) 2020",
            "Ministry of Education",
            (2020, 7, 29),
            "The National Education Policy 2020 is the first education policy of the 21st \
             century and aims to address the many growing developmental imperatives of our \
             country.",
            &["Verified", "Policy"],
            4.8,
            15420,
        ),
        entry(
            "PM USHA (Unnat Bharat Abhiyan Scheme for Higher Education)",
            "Department of Higher Education",
            (2023, 11, 5),
            "A flagship scheme to enhance quality and access in higher education institutions \
             across India.",
            &["Verified", "Scheme"],
            4.5,
            12350,
        ),
        entry(
            "UGC Guidelines for Online and Distance Learning 2023",
            "University Grants Commission",
            (2023, 3, 15),
            "Comprehensive guidelines for universities to implement online and distance \
             learning programs with quality assurance.",
            &["Verified", "Guideline"],
            4.6,
            9870,
        ),
        entry(
            "Samagra Shiksha Scheme 2.0",
            "Ministry of Education",
            (2021, 8, 4),
            "An overarching program for the school education sector extending from pre-school \
             to class 12.",
            &["Draft", "Scheme"],
            4.3,
            8640,
        ),
        entry(
            "SWAYAM Online Learning Platform - Annual Report 2024",
            "Ministry of Education",
            (2024, 1, 10),
            "Annual report showcasing the impact and reach of SWAYAM platform with over 2.5 \
             million learners.",
            &["Verified", "Report"],
            4.7,
            7230,
        ),
    ]
}

fn entry(
    title: &str,
    department: &str,
    (year, month, day): (i32, u32, u32),
    summary: &str,
    tags: &[&str],
    rating: f32,
    views: u32,
) -> SearchResult {
    SearchResult {
        title: title.to_string(),
        source: department.to_string(),
        published: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
        summary: summary.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        department: department.to_string(),
        rating,
        views,
        views_label: compact_count(views),
    }
}

/// 15420 -> "15.4K". Truncates rather than rounds.
pub fn compact_count(count: u32) -> String {
    if count < 1000 {
        return count.to_string();
    }
    let tenths = count / 100;
    format!("{}.{}K", tenths / 10, tenths % 10)
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_uppercase())
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(results: &SearchResults) -> Vec<&str> {
        results.results.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn unfiltered_search_returns_the_whole_catalogue_in_order() {
        let results = search(Some("NEP".into()), &ResultFilter::default());
        assert_eq!(results.total, 5);
        assert_eq!(results.query.as_deref(), Some("NEP"));
        assert_eq!(results.results[0].title, "National Education Policy (NEP) 2020");
        assert!(results.results[0].is_verified());
        assert!(!results.results[3].is_verified());
    }

    #[test]
    fn filters_by_type_tag_case_insensitively() {
        let filter = ResultFilter {
            document_type: Some("scheme".into()),
            ..Default::default()
        };
        let results = search(None, &filter);
        assert_eq!(
            titles(&results),
            vec![
                "PM USHA (Unnat Bharat Abhiyan Scheme for Higher Education)",
                "Samagra Shiksha Scheme 2.0",
            ]
        );
    }

    #[test]
    fn department_filter_accepts_initials() {
        let filter = ResultFilter {
            department: Some("UGC".into()),
            ..Default::default()
        };
        let results = search(None, &filter);
        assert_eq!(results.total, 1);
        assert_eq!(results.results[0].department, "University Grants Commission");

        let filter = ResultFilter {
            department: Some("Ministry of Education".into()),
            sort: SortOrder::Oldest,
            ..Default::default()
        };
        let results = search(None, &filter);
        assert_eq!(
            titles(&results),
            vec![
                "National Education Policy (NEP) 2020",
                "Samagra Shiksha Scheme 2.0",
                "SWAYAM Online Learning Platform - Annual Report 2024",
            ]
        );
    }

    #[test]
    fn sorts_by_date_title_and_views() {
        let by = |sort: SortOrder| search(None, &ResultFilter { sort, ..Default::default() });

        assert_eq!(
            by(SortOrder::Newest).results[0].title,
            "SWAYAM Online Learning Platform - Annual Report 2024"
        );
        assert_eq!(
            by(SortOrder::TitleAsc).results[0].title,
            "National Education Policy (NEP) 2020"
        );
        let views: Vec<u32> = by(SortOrder::MostViewed).results.iter().map(|r| r.views).collect();
        assert_eq!(views, vec![15420, 12350, 9870, 8640, 7230]);
    }

    #[test]
    fn blank_filters_mean_all() {
        let filter = ResultFilter {
            document_type: Some("  ".into()),
            department: Some(String::new()),
            sort: SortOrder::Relevance,
        };
        assert_eq!(search(None, &filter).total, 5);
    }

    #[test]
    fn view_counts_are_compacted() {
        assert_eq!(compact_count(15420), "15.4K");
        assert_eq!(compact_count(9870), "9.8K");
        assert_eq!(compact_count(640), "640");
    }

    #[test]
    fn filter_deserializes_from_camel_case() {
        let filter: ResultFilter =
            serde_json::from_str(r#"{"documentType":"Report","sort":"mostViewed"}"#).unwrap();
        assert_eq!(filter.document_type.as_deref(), Some("Report"));
        assert_eq!(filter.sort, SortOrder::MostViewed);
        assert_eq!(filter.department, None);
    }
}
