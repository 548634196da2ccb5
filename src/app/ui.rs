pub mod timeline;
pub mod topbar;
