pub mod dashboard;
pub mod donut_chart;
pub mod pie_card;

pub use dashboard::Dashboard;
pub use donut_chart::DonutChart;
pub use pie_card::PieCard;
