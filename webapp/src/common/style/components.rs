pub const BASE_COMPONENTS: &str = r#"
/* Layout */
.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--gutter);
}

.section {
  padding: var(--section-padding) 0;
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  padding: 12px 24px;
  border-radius: var(--radius-md);
  font-weight: 600;
  font-size: 1rem;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  background-color: var(--navy);
  color: var(--white);
  border: none;
}

.btn-outline {
  background-color: transparent;
  color: var(--navy);
  border: 2px solid var(--navy);
}

.btn-raised {
  box-shadow: 0 10px 20px rgba(19, 41, 75, 0.2);
}

.btn-wide {
  padding: 16px 48px;
}

.icon-button {
  background: none;
  border: none;
  cursor: pointer;
  color: var(--navy);
  padding: 0;
  display: inline-flex;
}

/* Argyle pattern background */
.argyle-bg {
  background-color: var(--carolina-blue);
  background-image:
    linear-gradient(45deg, var(--navy) 12.5%, transparent 12.5%, transparent 87.5%, var(--navy) 87.5%, var(--navy)),
    linear-gradient(135deg, var(--navy) 12.5%, transparent 12.5%, transparent 87.5%, var(--navy) 87.5%, var(--navy)),
    linear-gradient(45deg, var(--navy) 12.5%, transparent 12.5%, transparent 87.5%, var(--navy) 87.5%, var(--navy)),
    linear-gradient(135deg, var(--navy) 12.5%, transparent 12.5%, transparent 87.5%, var(--navy) 87.5%, var(--navy));
  background-size: 60px 60px;
  background-position: 0 0, 0 0, 30px 30px, 30px 30px;
}

.argyle-overlay {
  background: rgba(255, 255, 255, 0.92);
  backdrop-filter: blur(5px);
}
"#;
