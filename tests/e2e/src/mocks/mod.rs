//! Mock data builders for journey tests
