use crate::models::Rejection;

pub fn render(rejections: &[Rejection]) -> String {
    rejections
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
