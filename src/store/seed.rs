//! Demo dataset
//!
//! Fixed fallback staff records used when neither the remote store nor the
//! local cache has any staff. Demo passwords are hashed at seed time; no
//! plaintext credential is ever stored.

use crate::core::models::{StaffMember, StaffStatus};
use crate::core::services::auth;

/// Demo login password shared by the three seeded records
pub const DEMO_PASSWORD: &str = "password123";

const DEMO_SALT: &str = "veritrust-demo";

/// The fixed 3-record demo dataset
#[must_use]
pub fn demo_staff() -> Vec<StaffMember> {
    let password_hash = auth::hash_password(DEMO_PASSWORD, DEMO_SALT);
    vec![
        StaffMember {
            id: "NGO-8821".to_string(),
            full_name: "Sarah Jenkins".to_string(),
            role: "Field Coordinator".to_string(),
            department: "Humanitarian Aid".to_string(),
            join_date: "2023-01-15".to_string(),
            valid_until: "2025-12-31".to_string(),
            status: StaffStatus::Active,
            photo_url: "https://picsum.photos/200/200?random=1".to_string(),
            email: "sarah.j@ngo.org".to_string(),
            password_hash: password_hash.clone(),
            password_salt: DEMO_SALT.to_string(),
        },
        StaffMember {
            id: "NGO-9942".to_string(),
            full_name: "Michael Chen".to_string(),
            role: "Medical Officer".to_string(),
            department: "Health Services".to_string(),
            join_date: "2022-05-20".to_string(),
            valid_until: "2024-05-20".to_string(),
            status: StaffStatus::Expired,
            photo_url: "https://picsum.photos/200/200?random=2".to_string(),
            email: "m.chen@ngo.org".to_string(),
            password_hash: password_hash.clone(),
            password_salt: DEMO_SALT.to_string(),
        },
        StaffMember {
            id: "NGO-1102".to_string(),
            full_name: "David Okeke".to_string(),
            role: "Logistics Manager".to_string(),
            department: "Supply Chain".to_string(),
            join_date: "2024-02-10".to_string(),
            valid_until: "2026-02-10".to_string(),
            status: StaffStatus::Suspended,
            photo_url: "https://picsum.photos/200/200?random=3".to_string(),
            email: "d.okeke@ngo.org".to_string(),
            password_hash,
            password_salt: DEMO_SALT.to_string(),
        },
    ]
}
