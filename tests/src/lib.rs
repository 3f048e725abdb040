// Copyright (c) 2024-2025 The OrbitX Developers

//! Shared test scenarios for OrbitX wallet bridges.
//!
//! Scenarios run against the [mock] provider and host so the same
//! checks apply to any bridge build.

pub mod browser;


pub mod mock;

pub mod relay;

pub mod vectors;

pub mod wallet;
