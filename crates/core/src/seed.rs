//! Seed records shipped with the application.
//!
//! These are always present in catalog listings: the merge places persisted
//! uploads before them and drops any upload whose id collides with a seed id.
//! "Deleting" a seed record only ever affects a client's own view; the seed
//! reappears on the next load because it is defined here, in source.

use crate::course::Course;
use crate::note::{Note, NoteSource};
use crate::video::Video;

/// The shipped study notes.
pub fn seed_notes() -> Vec<Note> {
    vec![
        Note {
            id: "1".to_string(),
            title: "Basic Grammar Rules".to_string(),
            description: "Fundamental grammar concepts for beginners".to_string(),
            category: "Foundation".to_string(),
            source: NoteSource::File {
                file_name: "basic-grammar.pdf".to_string(),
                file_size: "2.5 MB".to_string(),
            },
            upload_date: "2024-01-15".to_string(),
            downloads: 45,
        },
        Note {
            id: "2".to_string(),
            title: "Professional Communication".to_string(),
            description: "Advanced communication skills for workplace".to_string(),
            category: "Professional".to_string(),
            source: NoteSource::Url {
                url: "https://drive.google.com/file/d/example".to_string(),
            },
            upload_date: "2024-01-10".to_string(),
            downloads: 32,
        },
        Note {
            id: "3".to_string(),
            title: "Interview Preparation".to_string(),
            description: "Complete guide for job interviews".to_string(),
            category: "Career".to_string(),
            source: NoteSource::File {
                file_name: "interview-prep.pdf".to_string(),
                file_size: "1.8 MB".to_string(),
            },
            upload_date: "2024-01-08".to_string(),
            downloads: 28,
        },
        Note {
            id: "4".to_string(),
            title: "Social English Conversations".to_string(),
            description: "Everyday conversation patterns and phrases".to_string(),
            category: "Social".to_string(),
            source: NoteSource::Url {
                url: "https://dropbox.com/s/example".to_string(),
            },
            upload_date: "2024-01-05".to_string(),
            downloads: 56,
        },
    ]
}

/// The shipped video lectures.
pub fn seed_videos() -> Vec<Video> {
    vec![
        Video {
            id: "1".to_string(),
            title: "Basic Grammar Introduction".to_string(),
            description: "Learn fundamental grammar concepts with examples".to_string(),
            category: "Foundation".to_string(),
            duration: "15:30".to_string(),
            instructor: "Ankit Sir".to_string(),
            url: "https://example.com/video1".to_string(),
            thumbnail:
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=200&fit=crop"
                    .to_string(),
            upload_date: "2024-01-15".to_string(),
            views: 156,
        },
        Video {
            id: "2".to_string(),
            title: "Professional Email Writing".to_string(),
            description: "Master the art of writing professional emails".to_string(),
            category: "Professional".to_string(),
            duration: "22:45".to_string(),
            instructor: "Ankit Sir".to_string(),
            url: "https://example.com/video2".to_string(),
            thumbnail:
                "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=300&h=200&fit=crop"
                    .to_string(),
            upload_date: "2024-01-10".to_string(),
            views: 89,
        },
        Video {
            id: "3".to_string(),
            title: "Interview Skills Masterclass".to_string(),
            description: "Complete guide to ace your job interviews".to_string(),
            category: "Career".to_string(),
            duration: "28:15".to_string(),
            instructor: "Ankit Sir".to_string(),
            url: "https://example.com/video3".to_string(),
            thumbnail:
                "https://images.unsplash.com/photo-1552664730-d307ca884978?w=300&h=200&fit=crop"
                    .to_string(),
            upload_date: "2024-01-08".to_string(),
            views: 203,
        },
        Video {
            id: "4".to_string(),
            title: "Daily Conversation Practice".to_string(),
            description: "Practice everyday English conversations".to_string(),
            category: "Social".to_string(),
            duration: "18:20".to_string(),
            instructor: "Ankit Sir".to_string(),
            url: "https://example.com/video4".to_string(),
            thumbnail:
                "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=300&h=200&fit=crop"
                    .to_string(),
            upload_date: "2024-01-05".to_string(),
            views: 134,
        },
    ]
}

/// The shipped course offerings.
pub fn seed_courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            title: "4-Months Complete Spoken English Course".to_string(),
            description: "Comprehensive spoken English course designed to build fluency and \
                          confidence in just 4 months."
                .to_string(),
            duration: "4 Months".to_string(),
            price: "₹4000".to_string(),
            original_price: "₹6000".to_string(),
            students: "500+".to_string(),
            instructor: "Ankit Sir".to_string(),
            category: "Complete Course".to_string(),
            is_active: true,
        },
        Course {
            id: "2".to_string(),
            title: "Basic Grammar Foundation".to_string(),
            description: "Learn fundamental grammar concepts and rules for better English \
                          communication."
                .to_string(),
            duration: "2 Months".to_string(),
            price: "₹2000".to_string(),
            original_price: "₹3000".to_string(),
            students: "200+".to_string(),
            instructor: "Ankit Sir".to_string(),
            category: "Foundation".to_string(),
            is_active: true,
        },
    ]
}
