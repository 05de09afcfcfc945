pub mod chat_widget;
