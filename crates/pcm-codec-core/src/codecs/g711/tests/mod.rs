//! G.711 test suites
