pub mod cataloguing_pro;
