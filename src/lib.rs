//! 핵심 ROI 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 다른 표시 계층에서도 재사용한다.

pub mod app;
pub mod config;
pub mod i18n;
pub mod report;
pub mod roi;
pub mod ui_cli;
pub mod waste_basis;
