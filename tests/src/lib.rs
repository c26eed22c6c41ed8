#![cfg(test)]
mod ownership;
