/*
 * Responsibility
 * - middleware の公開インターフェース
 * - cors::apply(...), http::apply(...)
 */
pub mod cors;
pub mod http;
