// ==========================================
// 育肥场杠杆计算器 - 报表层
// ==========================================
// 职责: 对比报告的文本渲染与 CSV 导出, 巴西数字格式
// 红线: 只读 ComparisonReport, 不做任何计算
// ==========================================

pub mod csv_export;
pub mod format;
pub mod text;

pub use csv_export::{export_csv_file, write_csv, ExportError};
pub use format::{format_currency, format_decimal, format_rate_as_percent, parse_decimal};
pub use text::render_text;
