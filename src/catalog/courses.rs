//! Course catalog records
//!
//! The built-in catalog is a static sample; callers can swap in their own
//! set by deserializing a JSON array of [`CandidateCourse`] records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level of a catalog course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Comprehensive,
}

impl CourseLevel {
    /// Scoring weight used by the course matcher and improvement predictor
    pub fn score(&self) -> f32 {
        match self {
            CourseLevel::Beginner => 0.6,
            CourseLevel::Intermediate => 0.8,
            CourseLevel::Advanced => 0.9,
            CourseLevel::Comprehensive => 1.0,
        }
    }

    /// Position in the difficulty hierarchy, 1-based
    pub fn rank(&self) -> i32 {
        match self {
            CourseLevel::Beginner => 1,
            CourseLevel::Intermediate => 2,
            CourseLevel::Advanced => 3,
            CourseLevel::Comprehensive => 4,
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CourseLevel::Beginner => "beginner",
            CourseLevel::Intermediate => "intermediate",
            CourseLevel::Advanced => "advanced",
            CourseLevel::Comprehensive => "comprehensive",
        };
        write!(f, "{}", name)
    }
}

/// A course as it appears in the catalog, immutable within a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateCourse {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub skills: Vec<String>,
    pub level: CourseLevel,
    pub rating: f32,
    pub completion_rate: f32,
    pub market_demand: f32,
    /// Free-text duration such as "30 hours"; parsed leniently downstream
    pub duration: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub url: String,
}

impl CandidateCourse {
    /// Built-in sample catalog used when no external catalog is supplied
    pub fn builtin_catalog() -> Vec<CandidateCourse> {
        vec![
            CandidateCourse {
                id: "course_001".to_string(),
                title: "Introduction to Programming with Python".to_string(),
                description: "Learn programming fundamentals with Python".to_string(),
                skills: vec!["python".to_string(), "problem solving".to_string()],
                level: CourseLevel::Beginner,
                rating: 4.7,
                completion_rate: 0.85,
                market_demand: 0.9,
                duration: "30 hours".to_string(),
                platform: "Careerak Academy".to_string(),
                url: "/courses/python-basics".to_string(),
            },
            CandidateCourse {
                id: "course_002".to_string(),
                title: "Web Application Development with React".to_string(),
                description: "Build interactive web applications with React".to_string(),
                skills: vec![
                    "react".to_string(),
                    "javascript".to_string(),
                    "frontend".to_string(),
                ],
                level: CourseLevel::Intermediate,
                rating: 4.8,
                completion_rate: 0.78,
                market_demand: 0.95,
                duration: "40 hours".to_string(),
                platform: "Careerak Academy".to_string(),
                url: "/courses/react-web-development".to_string(),
            },
            CandidateCourse {
                id: "course_003".to_string(),
                title: "Advanced Databases with MongoDB".to_string(),
                description: "Master NoSQL database administration with MongoDB".to_string(),
                skills: vec![
                    "mongodb".to_string(),
                    "database".to_string(),
                    "backend".to_string(),
                ],
                level: CourseLevel::Advanced,
                rating: 4.6,
                completion_rate: 0.72,
                market_demand: 0.85,
                duration: "35 hours".to_string(),
                platform: "Careerak Academy".to_string(),
                url: "/courses/mongodb-advanced".to_string(),
            },
            CandidateCourse {
                id: "course_004".to_string(),
                title: "Mobile Development with React Native".to_string(),
                description: "Build mobile apps for iOS and Android".to_string(),
                skills: vec![
                    "react native".to_string(),
                    "mobile".to_string(),
                    "javascript".to_string(),
                ],
                level: CourseLevel::Intermediate,
                rating: 4.5,
                completion_rate: 0.75,
                market_demand: 0.88,
                duration: "45 hours".to_string(),
                platform: "Careerak Academy".to_string(),
                url: "/courses/react-native-mobile".to_string(),
            },
            CandidateCourse {
                id: "course_005".to_string(),
                title: "UI/UX Design Fundamentals".to_string(),
                description: "Principles of user interface and experience design".to_string(),
                skills: vec![
                    "ui".to_string(),
                    "ux".to_string(),
                    "design".to_string(),
                    "figma".to_string(),
                ],
                level: CourseLevel::Beginner,
                rating: 4.9,
                completion_rate: 0.88,
                market_demand: 0.92,
                duration: "25 hours".to_string(),
                platform: "Careerak Academy".to_string(),
                url: "/courses/ui-ux-design".to_string(),
            },
            CandidateCourse {
                id: "course_006".to_string(),
                title: "Fullstack TypeScript with Node.js".to_string(),
                description: "Typed end-to-end development with TypeScript and Node.js".to_string(),
                skills: vec![
                    "typescript".to_string(),
                    "nodejs".to_string(),
                    "fullstack".to_string(),
                ],
                level: CourseLevel::Comprehensive,
                rating: 4.6,
                completion_rate: 0.7,
                market_demand: 0.9,
                duration: "60 hours".to_string(),
                platform: "Careerak Academy".to_string(),
                url: "/courses/fullstack-typescript".to_string(),
            },
        ]
    }
}
