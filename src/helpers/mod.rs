pub(crate) mod hex_view;
