// Domain layer: conversion models and the conversion-method port.

pub mod model;
pub mod ports;
