//! zview - 远程编辑后端的编辑视图核心
//!
//! 模块结构：
//! - core: 错误类型、字节/UTF-16 偏移换算
//! - models: 行、行缓存、选区、更新协议
//! - ui: 几何、颜色、字体度量、绘制命令
//! - kernel: 服务端口与适配器（配置、后端通道、路径）
//! - views: 编辑视图（坐标映射、渲染、输入会话、光标闪烁）
//! - app: 脚本回放驱动

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
pub mod ui;
pub mod views;
