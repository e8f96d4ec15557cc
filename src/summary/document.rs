use serde::Serialize;

/// Document shown in the viewer screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: &'static str,
    pub verified: bool,
    pub body: &'static str,
}

/// Fixed AI insight panel for the viewer document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub quick_summary: String,
    pub key_points: Vec<String>,
    pub implementation: String,
    pub confidence_percent: u8,
}

pub const NEP_QUICK_SUMMARY: &str = "NEP 2020 introduces a new 5+3+3+4 curricular structure, \
emphasizes early childhood education, promotes vocational training from Class 6, and aims for 6% \
GDP investment in education by 2040.";

const NEP_KEY_POINTS: [&str; 4] = [
    "New 5+3+3+4 structure replacing 10+2",
    "Flexible degree programs with multiple exit options",
    "50% vocational education exposure by 2025",
    "Mother tongue instruction till Grade 5",
];

const NEP_IMPLEMENTATION: &str = "Phased implementation with goals set for 2025, 2030, and 2040. \
Requires 6% GDP investment commitment.";

pub fn nep_2020() -> Document {
    Document {
        title: "National Education Policy (NEP) 2020",
        verified: true,
        body: NEP_2020_TEXT,
    }
}

pub fn nep_2020_summary() -> DocumentSummary {
    DocumentSummary {
        quick_summary: NEP_QUICK_SUMMARY.to_string(),
        key_points: NEP_KEY_POINTS.iter().map(|p| p.to_string()).collect(),
        implementation: NEP_IMPLEMENTATION.to_string(),
        confidence_percent: 95,
    }
}

const NEP_2020_TEXT: &str = r#"NATIONAL EDUCATION POLICY 2020

EXECUTIVE SUMMARY

The National Education Policy 2020 is the first education policy of the 21st century and replaces the thirty-four year old National Policy on Education (NPE), 1986. Built on the foundational pillars of Access, Equity, Quality, Affordability and Accountability, this policy is aligned to the 2030 Agenda for Sustainable Development and aims to transform India into a vibrant knowledge society and global knowledge superpower by making both school and college education more holistic, flexible, multidisciplinary, suited to 21st century needs and aimed at bringing out the unique capabilities of each student.

KEY HIGHLIGHTS

1. SCHOOL EDUCATION
The policy proposes a new pedagogical and curricular structure of 5+3+3+4 covering ages 3-18, replacing the 10+2 structure. This will bring early childhood education (ECE) into the mainstream education system.

2. HIGHER EDUCATION
Undergraduate degrees will be of 3 or 4 years with multiple exit options and appropriate certifications. Academic Bank of Credits to facilitate student mobility between institutions.

3. VOCATIONAL EDUCATION
Integration of vocational education starting from Class 6 with internships. At least 50% of learners should have exposure to vocational education by 2025.

4. MEDIUM OF INSTRUCTION
Wherever possible, the medium of instruction until at least Grade 5 will be the home language/mother tongue/local language/regional language.

5. TEACHER EDUCATION
By 2030, the minimum degree qualification for teaching will be a 4-year integrated B.Ed. degree.

IMPLEMENTATION TIMELINE

The policy aims to be implemented in phases:
- Short term goals: 2020-2025
- Medium term goals: 2025-2030  
- Long term goals: 2030-2040

FINANCIAL COMMITMENT

The policy reaffirms the commitment to invest 6% of GDP in education sector, with increased investment in teacher education and educational research.

CONCLUSION

The National Education Policy 2020 represents a comprehensive framework for elementary education to higher education as well as vocational training in both rural and urban India. The policy aims to transform the education system by 2040 into one that contributes to sustainable livelihoods and economic independence of all citizens."#;
