//! 订单模块
//!
//! - [`intake`] - 下单: 校验菜品与桌台、计算总额、生成订单号
//! - [`lifecycle`] - 订单状态流转 (Pending <-> Completed)
//! - [`history`] - 历史订单筛选
//! - [`form`] - 扁平表单 (`items[N][name]`) 解码
//! - [`money`] - 金额计算 (rust_decimal)

pub mod form;
pub mod history;
pub mod id;
pub mod intake;
pub mod lifecycle;
pub mod money;

pub use form::decode_order_form;
pub use history::{OrderFilter, list_orders};
pub use intake::place_order;
pub use lifecycle::{parse_status, update_order_status};
