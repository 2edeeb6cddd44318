//! Built-in employee dataset used when no data file is configured.

use super::{Record, Status};

/// The five sample employees, ids 1 through 5.
#[must_use]
pub fn employees() -> Vec<Record> {
    vec![
        Record::new(1, "김철수", "프론트엔드 개발자", "개발팀", 28, 45_000_000, Status::Active)
            .with_email("kim@example.com")
            .with_city("서울")
            .with_join_date("2022-03-15"),
        Record::new(2, "이영희", "백엔드 개발자", "개발팀", 32, 52_000_000, Status::Vacation)
            .with_email("lee@example.com")
            .with_city("부산")
            .with_join_date("2021-08-22"),
        Record::new(3, "박지민", "백엔드 개발자", "개발팀", 25, 38_000_000, Status::Active)
            .with_email("park@example.com")
            .with_city("대구")
            .with_join_date("2023-01-10"),
        Record::new(4, "정민수", "백엔드 개발자", "개발팀", 35, 58_000_000, Status::Active)
            .with_email("jung@example.com")
            .with_city("인천")
            .with_join_date("2024-05-18"),
        Record::new(5, "최유나", "백엔드 개발자", "개발팀", 29, 47_000_000, Status::Active)
            .with_email("choi@example.com")
            .with_city("광주")
            .with_join_date("2024-05-18"),
    ]
}
