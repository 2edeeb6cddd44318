use crate::model::{Field, FieldValue, Record, Status};

/// Render the raw value of `field` without any presentation formatting.
#[must_use]
pub fn raw(field: Field, record: &Record) -> String {
	match field.value(record) {
		FieldValue::Number(value) => value.to_string(),
		FieldValue::Text(text) => text.to_string(),
		FieldValue::Missing => String::new(),
	}
}

/// Group digits in threes: `45000000` becomes `45,000,000`.
#[must_use]
pub fn thousands(value: u64) -> String {
	let digits = value.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (idx, ch) in digits.chars().enumerate() {
		if idx > 0 && (digits.len() - idx) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}

pub fn salary(record: &Record) -> String {
	thousands(record.salary)
}

pub fn salary_won(record: &Record) -> String {
	format!("₩{}", thousands(record.salary))
}

pub fn age_years(record: &Record) -> String {
	format!("{}세", record.age)
}

pub fn status_label(record: &Record) -> String {
	match record.status {
		Status::Active => "Active",
		Status::Vacation => "Vacation",
		Status::Resigned => "Resigned",
	}
	.to_string()
}

pub fn status_label_ko(record: &Record) -> String {
	match record.status {
		Status::Active => "재직중",
		Status::Vacation => "휴가중",
		Status::Resigned => "퇴사",
	}
	.to_string()
}
